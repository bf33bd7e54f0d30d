use std::path::PathBuf;

use super::PageView;
use crate::models::ChartSpec;
use crate::utils::{format_es_cl, Table};

/// Page rendered on the terminal
///
/// The amount field and the selection are filled by the command layer
/// before each convert request; every region is printed as it changes.
pub struct TerminalPage {
    amount: String,
    selected: String,
    options: Vec<(String, String)>,
    chart_path: PathBuf,
}

impl TerminalPage {
    pub fn new(chart_path: PathBuf) -> Self {
        Self {
            amount: String::new(),
            selected: String::new(),
            options: Vec::new(),
            chart_path,
        }
    }

    /// Type into the amount field and pick a currency
    pub fn set_inputs(&mut self, amount: &str, code: &str) {
        self.amount = amount.to_string();
        self.selected = code.to_string();
    }
}

impl PageView for TerminalPage {
    fn amount_input(&self) -> String {
        self.amount.clone()
    }

    fn selected_code(&self) -> String {
        self.selected.clone()
    }

    fn append_option(&mut self, value: &str, label: &str) {
        self.options.push((value.to_string(), label.to_string()));
    }

    fn set_result(&mut self, text: &str) {
        println!("💱 Resultado: {} {}", text, self.selected);
    }

    fn set_error(&mut self, text: &str) {
        println!("❌ {}", text);
    }

    fn alert(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }

    fn show_chart(&mut self, spec: &ChartSpec) {
        let mut table = Table::new(vec!["Fecha", "Valor"]);
        for (date, value) in spec.labels.iter().zip(&spec.series) {
            table.add_row(vec![date.clone(), format_es_cl(*value)]);
        }

        println!("📈 {}", spec.title);
        if !table.is_empty() {
            print!("{}", table.render());
        }
        println!("Gráfico guardado en {}", self.chart_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_are_read_back() {
        let mut page = TerminalPage::new(PathBuf::from("grafico.png"));
        page.set_inputs("1800", "dolar");

        assert_eq!(page.amount_input(), "1800");
        assert_eq!(page.selected_code(), "dolar");
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let mut page = TerminalPage::new(PathBuf::from("grafico.png"));
        page.append_option("uf", "Unidad de fomento (UF)");
        page.append_option("dolar", "Dólar observado");

        let codes: Vec<&str> = page.options.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, vec!["uf", "dolar"]);
    }
}
