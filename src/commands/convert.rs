use crate::api::IndicatorSource;
use crate::page::{PageController, TerminalPage};
use crate::services::chart_service::ChartRenderer;

/// Fill the page inputs and trigger a conversion
pub async fn execute<S, R>(
    controller: &mut PageController<S, TerminalPage, R>,
    amount: &str,
    code: &str,
) where
    S: IndicatorSource,
    R: ChartRenderer,
{
    tracing::info!("💱 Convert requested: amount={:?} code={:?}", amount, code);

    controller.view_mut().set_inputs(amount, code);
    controller.on_convert_requested().await;
}
