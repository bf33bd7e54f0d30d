use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// One object-valued entry of the indicator list, before filtering
///
/// Every field is optional because the list mixes currencies with
/// percentages and other indicators that do not all carry the same shape.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawIndicator {
    #[serde(rename = "codigo", default, deserialize_with = "super::serde_util::code_or_empty::deserialize")]
    pub code: String,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "unidad_medida", default)]
    pub unit: Option<String>,
    #[serde(rename = "valor", default)]
    pub value: Option<f64>,
    /// Display only; an unparseable date is dropped, not the entry
    #[serde(rename = "fecha", default, deserialize_with = "super::serde_util::lenient_datetime::deserialize")]
    pub date: Option<DateTime<Utc>>,
}

/// One record of a currency's `serie`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawSeriesRecord {
    #[serde(rename = "fecha")]
    pub timestamp: String,
    #[serde(rename = "valor")]
    pub value: f64,
}

/// Response from GET /{code}/
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencySeriesResponse {
    /// Newest first, as published
    #[serde(rename = "serie")]
    pub entries: Vec<RawSeriesRecord>,
}

/// Error type for indicator API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Network failure or unreadable body
    #[error("Transport Error: {0}")]
    Transport(String),
    /// Body was not the JSON we expected
    #[error("Parse Error: {0}")]
    Parse(String),
    /// The API does not know the requested currency
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Any other non-success status
    #[error("HTTP Error ({0}): {1}")]
    Http(u16, String),
    #[error("Invalid currency code: '{0}'")]
    InvalidCode(String),
}
