use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod page;
mod services;
mod utils;

use api::mindicador::MindicadorClient;
use commands::CommandOutcome;
use page::{PageController, PageState, TerminalPage};
use services::chart_service::PngChartRenderer;
use utils::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so they never interleave with the page on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("conversor_clp=info,reqwest=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("💱 Starting conversor-clp...");

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    let client = MindicadorClient::with_base_url(config.base_url.clone());
    info!("Using indicator API at {}", client.base_url());
    let view = TerminalPage::new(config.chart_output_path.clone());
    let renderer = PngChartRenderer::new(
        config.chart_output_path.clone(),
        config.chart_width,
        config.chart_height,
    );

    let mut controller = PageController::new(
        client,
        view,
        renderer,
        config.max_points,
        config.support_contact.clone(),
    );
    controller.initialize().await;

    // One-shot mode: conversor-clp <monto> <codigo>
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [amount, code] = args.as_slice() {
        commands::convert::execute(&mut controller, amount, code).await;
        return;
    }

    if controller.state() == PageState::Uninitialized {
        error!("Currency list unavailable; conversions are disabled until restart");
    }

    commands::help::execute();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        if commands::handle_line(&mut controller, &line).await == CommandOutcome::Quit {
            break;
        }
    }

    info!("Bye");
}
