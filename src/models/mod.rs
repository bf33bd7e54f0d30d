//! Data models shared by the services and the page controller

pub mod indicator;
pub mod series;
pub mod chart;
pub mod conversion;

pub use indicator::IndicatorEntry;
pub use series::{HistoricalSeries, SeriesPoint};
pub use chart::ChartSpec;
pub use conversion::ConversionResult;
