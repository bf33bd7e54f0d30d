use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::PageView;
use crate::api::mindicador::ApiError;
use crate::api::IndicatorSource;
use crate::services::catalog_service::CurrencyCatalog;
use crate::services::chart_service::{build_chart_spec, ChartError, ChartHandle, ChartRenderer};
use crate::services::conversion_service::{convert_to, parse_amount, AmountError};
use crate::services::series_service::{to_chronological, SeriesError};
use crate::utils::user_error_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Catalog not loaded; convert requests are ignored
    Uninitialized,
    Ready,
    Converting,
    ErrorDisplayed,
}

/// Anything that can go wrong while redrawing the graph
#[derive(Debug, Error)]
enum GraphError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Drives the page: loads the catalog once, then converts and plots on request
pub struct PageController<S, V, R>
where
    R: ChartRenderer,
{
    source: S,
    view: V,
    renderer: R,
    catalog: Option<CurrencyCatalog>,
    chart: Option<R::Handle>,
    state: PageState,
    max_points: usize,
    support_contact: String,
}

impl<S, V, R> PageController<S, V, R>
where
    S: IndicatorSource,
    V: PageView,
    R: ChartRenderer,
{
    pub fn new(source: S, view: V, renderer: R, max_points: usize, support_contact: String) -> Self {
        Self {
            source,
            view,
            renderer,
            catalog: None,
            chart: None,
            state: PageState::Uninitialized,
            max_points,
            support_contact,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn catalog(&self) -> Option<&CurrencyCatalog> {
        self.catalog.as_ref()
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn show_error(&mut self, error: &dyn std::fmt::Display, action: &str) {
        let message = user_error_message(error, action, &self.support_contact);
        self.view.set_error(&message);
    }

    /// Fetch the indicator list, build the catalog and fill the selection
    ///
    /// On failure the page stays uninitialized until restarted.
    pub async fn initialize(&mut self) {
        if self.state != PageState::Uninitialized {
            warn!("Page already initialized, ignoring");
            return;
        }

        info!("Loading indicator list...");
        let raw_entries = match self.source.fetch_all_indicators().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to load indicator list: {}", e);
                self.show_error(&e, "inicializar");
                return;
            }
        };

        let catalog = CurrencyCatalog::build(raw_entries);
        for entry in catalog.entries() {
            self.view.append_option(&entry.code, &entry.name);
        }

        info!("Page ready with {} currencies", catalog.len());
        self.catalog = Some(catalog);
        self.state = PageState::Ready;
    }

    /// Convert the entered amount into the selected currency and redraw its graph
    pub async fn on_convert_requested(&mut self) {
        if self.catalog.is_none() {
            debug!("Convert requested before initialization, ignoring");
            return;
        }

        let amount_input = self.view.amount_input();
        let clp_amount = match parse_amount(&amount_input) {
            Ok(amount) => amount,
            Err(AmountError::Blank) => {
                self.view.alert(&AmountError::Blank.to_string());
                return;
            }
            Err(e) => {
                warn!("Rejected amount input: {}", e);
                self.show_error(&e, "convertir el monto");
                self.state = PageState::ErrorDisplayed;
                return;
            }
        };

        let selected = self.view.selected_code();
        let entry = self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.find_by_code(&selected))
            .cloned();

        let Some(entry) = entry else {
            warn!("Selected currency '{}' is not in the catalog", selected);
            let e = ApiError::NotFound(format!("'{}' no está en el catálogo", selected));
            self.show_error(&e, &format!("buscar la moneda de codigo: {}", selected));
            self.state = PageState::ErrorDisplayed;
            return;
        };

        self.state = PageState::Converting;

        let result = convert_to(&entry, clp_amount);
        debug!(
            "{} CLP / {} = {} {}",
            result.clp_amount, result.rate, result.converted, result.code
        );
        self.view.set_result(&result.formatted);

        match self.draw_graph(&entry.code).await {
            Ok(()) => self.state = PageState::Ready,
            Err(e) => {
                error!("Failed to draw graph for '{}': {}", entry.code, e);
                self.show_error(&e, "tratar de dibujar el gráfico");
                self.state = PageState::ErrorDisplayed;
            }
        }
    }

    /// Dispose the current chart, then fetch, transform and render a new one
    async fn draw_graph(&mut self, currency_code: &str) -> Result<(), GraphError> {
        if let Some(previous) = self.chart.take() {
            if let Err(e) = previous.destroy() {
                warn!("{}", e);
            }
        }

        let response = self.source.fetch_currency_series(currency_code).await?;
        let series = to_chronological(&response.entries, self.max_points)?;
        if series.is_empty() {
            warn!("No series points to plot for '{}'", currency_code);
        }
        let spec = build_chart_spec(currency_code, &series);

        let handle = self.renderer.render(&spec)?;
        self.chart = Some(handle);
        self.view.show_chart(&spec);

        Ok(())
    }
}
