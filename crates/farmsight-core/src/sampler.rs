//! Forecast sampler: seven representative points from a dense hourly series.
//!
//! Charts render a week at a glance from a multi-hundred-point hourly
//! series. The sampler anchors the first point to yesterday noon and the
//! second to today noon, then takes one point per day for five more days.
//! Noon is used because it is the most representative hour for a daily
//! value; when a day has no noon entry the first entry of that day is used
//! instead, and when the day is missing entirely the sampler falls back as
//! described on [`sample_forecast`].
//!
//! Everything here is pure: the caller supplies "today" so behavior is
//! reproducible in tests.

use serde::Serialize;
use time::{Date, Duration};

use farmsight_types::{HourlySeries, format_value, unit_suffix};

/// Month abbreviations used in point labels, index 0 = January.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Hours between daily sample points; the series is hourly, so +24 is one day.
const HOURS_PER_DAY: usize = 24;

/// Days sampled after today.
const DAYS_AHEAD: usize = 5;

/// One chart-ready sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledPoint {
    /// Source timestamp, e.g. `"2026-08-28T12:00"`.
    pub time: String,
    /// Compact date label, e.g. `"Aug 28"`.
    pub label: String,
    /// Raw metric value.
    pub value: f64,
    /// Value formatted at metric precision with unit suffix, e.g. `"21.6°C"`.
    pub display: String,
}

/// Sample up to seven representative points from an hourly series.
///
/// Anchor selection:
/// 1. yesterday at 12:00, falling back to the first entry on yesterday's
///    date, falling back to index 0;
/// 2. today at 12:00, falling back to the first entry on today's date,
///    falling back to yesterday's index + 24;
/// 3. five more points at 24-hour steps after today's index.
///
/// Indices past the end of the series are skipped, so fewer than seven
/// points near the end of available data is normal. An empty series
/// produces no points.
///
/// # Examples
///
/// ```
/// use farmsight_core::sampler::sample_forecast;
/// use farmsight_types::HourlySeries;
/// use time::macros::date;
///
/// let series = HourlySeries::new(
///     "temperature_2m",
///     vec!["2026-08-28T12:00".to_string()],
///     vec![21.567],
/// )
/// .unwrap();
///
/// let points = sample_forecast(&series, date!(2026 - 08 - 28));
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].label, "Aug 28");
/// assert_eq!(points[0].display, "21.6°C");
/// ```
#[must_use]
pub fn sample_forecast(series: &HourlySeries, today: Date) -> Vec<SampledPoint> {
    if series.is_empty() {
        return Vec::new();
    }

    let yesterday = today.saturating_sub(Duration::days(1));
    let today_str = iso_date(today);
    let yesterday_str = iso_date(yesterday);

    let yesterday_index = find_day_index(&series.time, &yesterday_str).unwrap_or(0);
    let today_index = find_day_index(&series.time, &today_str)
        .unwrap_or(yesterday_index + HOURS_PER_DAY);

    let mut indices = Vec::with_capacity(2 + DAYS_AHEAD);
    indices.push(yesterday_index);
    indices.push(today_index);
    for day in 1..=DAYS_AHEAD {
        indices.push(today_index + day * HOURS_PER_DAY);
    }

    indices
        .into_iter()
        .filter(|&index| index < series.len())
        .map(|index| point_at(series, index))
        .collect()
}

/// Find the first entry on `date`, preferring the 12:00 entry.
fn find_day_index(times: &[String], date: &str) -> Option<usize> {
    times
        .iter()
        .position(|t| t.starts_with(date) && t.contains("T12:00"))
        .or_else(|| times.iter().position(|t| t.starts_with(date)))
}

fn point_at(series: &HourlySeries, index: usize) -> SampledPoint {
    let time = series.time[index].clone();
    let value = series.values[index];
    let display = format!(
        "{}{}",
        format_value(value, &series.metric),
        unit_suffix(&series.metric)
    );
    SampledPoint {
        label: month_day_label(&time),
        time,
        value,
        display,
    }
}

/// Render `"2026-08-28T12:00"` as `"Aug 28"`.
///
/// Malformed timestamps fall back to their date portion unchanged.
fn month_day_label(timestamp: &str) -> String {
    let date = timestamp.split('T').next().unwrap_or(timestamp);
    let mut parts = date.split('-');
    let _year = parts.next();
    let month = parts.next().and_then(|m| m.parse::<usize>().ok());
    let day = parts.next().and_then(|d| d.parse::<u32>().ok());

    match (month, day) {
        (Some(month @ 1..=12), Some(day)) => format!("{} {}", MONTHS[month - 1], day),
        _ => date.to_string(),
    }
}

fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use time::macros::date;

    /// Build an hourly series of `hours` points starting at `start` 00:00,
    /// with values 0, 1, 2, ...
    fn synthetic_series(start: Date, hours: usize) -> HourlySeries {
        let mut time = Vec::with_capacity(hours);
        let mut values = Vec::with_capacity(hours);
        for hour in 0..hours {
            let day = start.saturating_add(Duration::days((hour / 24) as i64));
            time.push(format!("{}T{:02}:00", iso_date(day), hour % 24));
            values.push(hour as f64);
        }
        HourlySeries::new("temperature_2m", time, values).unwrap()
    }

    #[test]
    fn test_240_hour_series_yields_seven_daily_points() {
        // Series starts yesterday at 00:00, so "today" begins at hour 24.
        let today = date!(2026 - 08 - 28);
        let series = synthetic_series(date!(2026 - 08 - 27), 240);

        let points = sample_forecast(&series, today);
        assert_eq!(points.len(), 7);

        // Yesterday noon, today noon, then +24 per day.
        assert_eq!(points[0].value, 12.0);
        assert_eq!(points[1].value, 36.0);
        for pair in points.windows(2).skip(1) {
            assert_eq!(pair[1].value - pair[0].value, 24.0);
        }

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Aug 27", "Aug 28", "Aug 29", "Aug 30", "Aug 31", "Sep 1", "Sep 2"]
        );
    }

    #[test]
    fn test_empty_series_yields_no_points() {
        let series = HourlySeries::default();
        assert!(sample_forecast(&series, date!(2026 - 08 - 28)).is_empty());
    }

    #[test]
    fn test_short_series_yields_fewer_points() {
        // Only three days of data: yesterday, today, tomorrow.
        let series = synthetic_series(date!(2026 - 08 - 27), 72);
        let points = sample_forecast(&series, date!(2026 - 08 - 28));
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].value, 60.0);
    }

    #[test]
    fn test_missing_yesterday_falls_back_to_first_entry() {
        // Series starts today, so yesterday is absent.
        let series = synthetic_series(date!(2026 - 08 - 28), 96);
        let points = sample_forecast(&series, date!(2026 - 08 - 28));

        assert_eq!(points[0].value, 0.0);
        // Today's noon entry is still found directly.
        assert_eq!(points[1].value, 12.0);
    }

    #[test]
    fn test_missing_today_approximates_one_day_after_yesterday() {
        // Only yesterday's 24 hours exist; today's anchor falls back to
        // yesterday + 24, which is past the end and therefore skipped.
        let series = synthetic_series(date!(2026 - 08 - 27), 24);
        let points = sample_forecast(&series, date!(2026 - 08 - 28));

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 12.0);
    }

    #[test]
    fn test_day_without_noon_uses_first_entry_of_day() {
        let series = HourlySeries::new(
            "precipitation",
            vec![
                "2026-08-27T18:00".to_string(),
                "2026-08-27T19:00".to_string(),
                "2026-08-28T00:00".to_string(),
            ],
            vec![0.4, 0.5, 0.0],
        )
        .unwrap();

        let points = sample_forecast(&series, date!(2026 - 08 - 28));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, 0.4);
        assert_eq!(points[0].label, "Aug 27");
        assert_eq!(points[1].value, 0.0);
    }

    #[test]
    fn test_display_uses_metric_precision_and_unit() {
        let series = HourlySeries::new(
            "soil_moisture_9_to_27cm",
            vec!["2026-08-28T12:00".to_string()],
            vec![0.12345],
        )
        .unwrap();

        let points = sample_forecast(&series, date!(2026 - 08 - 28));
        assert_eq!(points[0].display, "0.123m³/m³");
    }

    #[test]
    fn test_month_day_label() {
        assert_eq!(month_day_label("2026-01-05T12:00"), "Jan 5");
        assert_eq!(month_day_label("2026-12-31T00:00"), "Dec 31");
        // Malformed input falls back to the date portion.
        assert_eq!(month_day_label("garbage"), "garbage");
        assert_eq!(month_day_label("2026-13-01T00:00"), "2026-13-01");
    }

    proptest! {
        #[test]
        fn prop_at_most_seven_points_all_from_series(hours in 0usize..400) {
            let series = synthetic_series(date!(2026 - 08 - 27), hours);
            let points = sample_forecast(&series, date!(2026 - 08 - 28));

            prop_assert!(points.len() <= 7);
            for point in &points {
                let index = point.value as usize;
                prop_assert!(index < series.len());
                prop_assert_eq!(&series.time[index], &point.time);
            }
        }

        #[test]
        fn prop_labels_are_calendar_ordered(hours in 1usize..400) {
            let series = synthetic_series(date!(2026 - 08 - 27), hours);
            let points = sample_forecast(&series, date!(2026 - 08 - 28));

            // Source timestamps are ISO-8601, so lexicographic order is
            // calendar order.
            for pair in points.windows(2) {
                prop_assert!(pair[0].time <= pair[1].time);
            }
        }
    }
}
