//! Conversion result models

/// Result of converting an amount of CLP into another currency
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub code: String,
    pub clp_amount: f64,
    pub rate: f64,
    pub converted: f64,
    /// `converted` formatted for display (es-CL)
    pub formatted: String,
}
