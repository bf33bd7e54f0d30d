//! External indicator API access

pub mod mindicador;

use mindicador::{ApiError, CurrencySeriesResponse, RawIndicator};

/// Source of indicator data consumed by the page controller
pub trait IndicatorSource {
    /// Every object-valued entry of the indicator list, in response order
    async fn fetch_all_indicators(&self) -> Result<Vec<RawIndicator>, ApiError>;

    /// The full historical series for one currency, newest first
    async fn fetch_currency_series(&self, code: &str) -> Result<CurrencySeriesResponse, ApiError>;
}
