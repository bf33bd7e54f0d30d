use thiserror::Error;

use crate::models::{ConversionResult, IndicatorEntry};
use crate::utils::format_es_cl;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AmountError {
    /// Empty field; the page shows a blocking prompt instead of an error
    #[error("El campo de `Pesos CLP` no debe estar vacío")]
    Blank,
    #[error("'{0}' no es un monto válido")]
    InvalidInput(String),
}

/// Parse the raw CLP amount field
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AmountError::Blank);
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(AmountError::InvalidInput(input.to_string())),
    }
}

/// CLP amount divided by the CLP-per-unit rate
///
/// A zero rate is not guarded: the infinite or NaN result is returned as is.
pub fn convert(clp_amount: f64, unit_rate: f64) -> f64 {
    clp_amount / unit_rate
}

/// Convert into `entry`'s currency and format the result for display
pub fn convert_to(entry: &IndicatorEntry, clp_amount: f64) -> ConversionResult {
    let converted = convert(clp_amount, entry.value);

    ConversionResult {
        code: entry.code.clone(),
        clp_amount,
        rate: entry.value,
        converted,
        formatted: format_es_cl(converted),
    }
}
