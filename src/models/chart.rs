//! Chart generation models

/// Everything the chart renderer needs to draw one line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<f64>,
    pub title: String,
}
