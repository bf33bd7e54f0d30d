//! Currency snapshot models

use chrono::{DateTime, Utc};

/// One Peso-denominated indicator snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorEntry {
    pub code: String,
    pub name: String,
    pub unit: String,
    /// CLP per one unit of the indicator
    pub value: f64,
    pub date: Option<DateTime<Utc>>,
}
