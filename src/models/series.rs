//! Historical series models

/// A single dated value, date only (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// Oldest-first points ready for charting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalSeries {
    pub points: Vec<SeriesPoint>,
}

impl HistoricalSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}
