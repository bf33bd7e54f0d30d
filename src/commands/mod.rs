pub mod convert;
pub mod currencies;
pub mod help;

use crate::api::IndicatorSource;
use crate::page::{PageController, TerminalPage};
use crate::services::chart_service::ChartRenderer;

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListCurrencies,
    Convert { amount: String, code: String },
    Help,
    Quit,
    Empty,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return Command::Empty;
    };
    let args = &parts[1..];

    match command.to_lowercase().as_str() {
        "monedas" | "lista" => Command::ListCurrencies,
        "ayuda" | "help" | "?" => Command::Help,
        "salir" | "exit" | "quit" => Command::Quit,
        "convertir" | "c" => match args {
            [] => Command::Convert { amount: String::new(), code: String::new() },
            [code] => Command::Convert { amount: String::new(), code: code.to_string() },
            [amount, code, ..] => Command::Convert { amount: amount.to_string(), code: code.to_string() },
        },
        _ => match parts.as_slice() {
            [amount, code] => Command::Convert { amount: amount.to_string(), code: code.to_string() },
            _ => Command::Unknown(command.to_string()),
        },
    }
}

/// Parse and run one line of input against the page
pub async fn handle_line<S, R>(
    controller: &mut PageController<S, TerminalPage, R>,
    line: &str,
) -> CommandOutcome
where
    S: IndicatorSource,
    R: ChartRenderer,
{
    match parse_command(line) {
        Command::ListCurrencies => currencies::execute(controller.catalog()),
        Command::Convert { amount, code } => convert::execute(controller, &amount, &code).await,
        Command::Help => help::execute(),
        Command::Quit => return CommandOutcome::Quit,
        Command::Empty => {}
        Command::Unknown(command) => {
            tracing::debug!("Unknown command: {}", command);
            println!("❓ Comando desconocido: '{}'. Escribe `ayuda` para ver los comandos.", command);
        }
    }

    CommandOutcome::Continue
}
