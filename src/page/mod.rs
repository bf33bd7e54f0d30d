//! The conversion page: its UI slots and the controller that drives them

pub mod controller;
pub mod terminal;

pub use controller::{PageController, PageState};
pub use terminal::TerminalPage;

use crate::models::ChartSpec;

/// The UI surface the controller reads from and renders into
pub trait PageView {
    /// Raw contents of the CLP amount field
    fn amount_input(&self) -> String;

    /// Code of the currently selected option
    fn selected_code(&self) -> String;

    /// Add one option to the currency selection
    fn append_option(&mut self, value: &str, label: &str);

    fn set_result(&mut self, text: &str);

    fn set_error(&mut self, text: &str);

    /// Blocking prompt for validation problems the user must fix
    fn alert(&mut self, message: &str);

    /// Called after a chart has been rendered for `spec`
    fn show_chart(&mut self, spec: &ChartSpec);
}
