pub mod client;
pub mod models;
mod serde_util;

pub use client::MindicadorClient;
pub use models::{ApiError, CurrencySeriesResponse, RawIndicator, RawSeriesRecord};
