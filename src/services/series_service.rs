use thiserror::Error;

use crate::api::mindicador::RawSeriesRecord;
use crate::models::{HistoricalSeries, SeriesPoint};

/// Number of recent points plotted by default
pub const DEFAULT_MAX_POINTS: usize = 10;

const DATE_TIME_SEPARATOR: char = 'T';

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeriesError {
    #[error("Unexpected timestamp format: '{0}'")]
    Format(String),
}

/// Date portion of an ISO-like timestamp (everything before the first `T`)
pub fn extract_date(timestamp: &str) -> Result<&str, SeriesError> {
    timestamp
        .find(DATE_TIME_SEPARATOR)
        .map(|idx| &timestamp[..idx])
        .ok_or_else(|| SeriesError::Format(timestamp.to_string()))
}

/// Take the newest `max_points` records and return them oldest-first
///
/// Input is newest-first as published. Short input yields fewer points.
pub fn to_chronological(
    records: &[RawSeriesRecord],
    max_points: usize,
) -> Result<HistoricalSeries, SeriesError> {
    let mut points = records
        .iter()
        .take(max_points)
        .map(|record| {
            Ok(SeriesPoint {
                date: extract_date(&record.timestamp)?.to_string(),
                value: record.value,
            })
        })
        .collect::<Result<Vec<_>, SeriesError>>()?;

    points.reverse();

    Ok(HistoricalSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// `count` daily records, newest first, starting at 2024-05-31
    fn newest_first(count: usize) -> Vec<RawSeriesRecord> {
        let newest = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        (0..count)
            .map(|i| RawSeriesRecord {
                timestamp: format!("{}T04:00:00.000Z", newest - Duration::days(i as i64)),
                value: 900.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn test_fifteen_records_become_ten_oldest_first() {
        let series = to_chronological(&newest_first(15), DEFAULT_MAX_POINTS).unwrap();

        assert_eq!(series.len(), 10);
        assert_eq!(series.points[0].date, "2024-05-22");
        assert_eq!(series.points[9].date, "2024-05-31");
        assert_eq!(series.points[9].value, 900.0);
        assert!(series.points.iter().all(|p| !p.date.contains('T')));
    }

    #[test]
    fn test_dates_are_non_decreasing() {
        let series = to_chronological(&newest_first(12), DEFAULT_MAX_POINTS).unwrap();
        let dates = series.dates();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_reversing_recovers_published_order() {
        let records = newest_first(7);
        let series = to_chronological(&records, 5).unwrap();

        let mut restored = series.points.clone();
        restored.reverse();

        let expected: Vec<f64> = records.iter().take(5).map(|r| r.value).collect();
        let restored_values: Vec<f64> = restored.iter().map(|p| p.value).collect();
        assert_eq!(restored_values, expected);
    }

    #[test]
    fn test_short_input_is_not_an_error() {
        let series = to_chronological(&newest_first(3), DEFAULT_MAX_POINTS).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_zero_max_points_is_empty() {
        let series = to_chronological(&newest_first(4), 0).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_missing_separator_is_format_error() {
        let records = vec![RawSeriesRecord {
            timestamp: "2024-05-31 04:00:00".to_string(),
            value: 1.0,
        }];

        let result = to_chronological(&records, DEFAULT_MAX_POINTS);
        assert_eq!(result, Err(SeriesError::Format("2024-05-31 04:00:00".to_string())));
    }

    #[test]
    fn test_records_past_the_cap_are_not_inspected() {
        let mut records = newest_first(2);
        records.push(RawSeriesRecord {
            timestamp: "garbage".to_string(),
            value: 0.0,
        });

        assert!(to_chronological(&records, 2).is_ok());
    }
}
