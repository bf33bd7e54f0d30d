use crate::services::catalog_service::CurrencyCatalog;
use crate::utils::{format_es_cl, Table};

/// Render the catalog as a table of code, name, rate and snapshot date
pub fn render_catalog(catalog: &CurrencyCatalog) -> String {
    if catalog.is_empty() {
        return "No hay monedas en Pesos disponibles.".to_string();
    }

    let mut table = Table::new(vec!["Código", "Nombre", "Valor (CLP)", "Fecha"]);
    for entry in catalog.entries() {
        table.add_row(vec![
            entry.code.clone(),
            entry.name.clone(),
            format_es_cl(entry.value),
            entry
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]);
    }

    table.render()
}

pub fn execute(catalog: Option<&CurrencyCatalog>) {
    match catalog {
        Some(catalog) => print!("{}", render_catalog(catalog)),
        None => println!("⚠️  Las monedas no están disponibles. Reinicia el programa para reintentar."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mindicador::RawIndicator;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_catalog() {
        let catalog = CurrencyCatalog::build(vec![RawIndicator {
            code: "dolar".to_string(),
            name: Some("Dólar observado".to_string()),
            unit: Some("Pesos".to_string()),
            value: Some(923.4),
            date: Utc.with_ymd_and_hms(2024, 5, 10, 4, 0, 0).single(),
        }]);

        let rendered = render_catalog(&catalog);
        assert!(rendered.contains("dolar"));
        assert!(rendered.contains("923,4"));
        assert!(rendered.contains("2024-05-10"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let rendered = render_catalog(&CurrencyCatalog::default());
        assert_eq!(rendered, "No hay monedas en Pesos disponibles.");
    }
}
