use tracing::{debug, warn};

use crate::api::mindicador::RawIndicator;
use crate::models::IndicatorEntry;

/// Only indicators measured in this unit can be converted from CLP
pub const PESOS_UNIT: &str = "Pesos";

/// Peso-denominated indicators in API response order
///
/// Built once after the indicator list is fetched and never mutated.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    entries: Vec<IndicatorEntry>,
}

impl CurrencyCatalog {
    /// Keep entries whose unit is exactly "Pesos", preserving input order
    pub fn build(raw_entries: Vec<RawIndicator>) -> Self {
        let mut entries = Vec::new();

        for raw in raw_entries {
            if raw.unit.as_deref() != Some(PESOS_UNIT) {
                continue;
            }

            let Some(value) = raw.value else {
                warn!("Indicator '{}' is in {} but has no value, skipping", raw.code, PESOS_UNIT);
                continue;
            };

            entries.push(IndicatorEntry {
                name: raw.name.unwrap_or_else(|| raw.code.clone()),
                code: raw.code,
                unit: PESOS_UNIT.to_string(),
                value,
                date: raw.date,
            });
        }

        debug!("Catalog built with {} currencies", entries.len());
        Self { entries }
    }

    /// First entry whose code matches exactly (case-sensitive)
    pub fn find_by_code(&self, code: &str) -> Option<&IndicatorEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    pub fn entries(&self) -> &[IndicatorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
