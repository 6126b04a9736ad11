//! Hourly time series for one weather metric.

use serde::{Deserialize, Serialize};

/// A dense hourly series for a single weather metric.
///
/// `time` and `values` are parallel arrays: `values[i]` is the forecast for
/// the ISO-8601 timestamp `time[i]` (minute precision, e.g.
/// `"2026-08-28T12:00"`). The series is transient — it is re-fetched
/// whenever a chart is rendered and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Metric name as used by the weather API, e.g. `"temperature_2m"`.
    pub metric: String,
    /// Hourly timestamps.
    pub time: Vec<String>,
    /// Metric values, parallel to `time`.
    pub values: Vec<f64>,
}

impl HourlySeries {
    /// Create a series, checking that the arrays are parallel.
    ///
    /// Returns `None` when the lengths differ; callers surface that as an
    /// invalid-data error with endpoint context.
    #[must_use]
    pub fn new(metric: impl Into<String>, time: Vec<String>, values: Vec<f64>) -> Option<Self> {
        if time.len() != values.len() {
            return None;
        }
        Some(Self {
            metric: metric.into(),
            time,
            values,
        })
    }

    /// Number of hourly points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let series = HourlySeries::new(
            "temperature_2m",
            vec!["2026-08-28T00:00".to_string()],
            vec![1.0, 2.0],
        );
        assert!(series.is_none());
    }

    #[test]
    fn test_new_accepts_parallel_arrays() {
        let series = HourlySeries::new(
            "precipitation",
            vec!["2026-08-28T00:00".to_string(), "2026-08-28T01:00".to_string()],
            vec![0.0, 0.4],
        )
        .unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_empty_series() {
        let series = HourlySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }
}
