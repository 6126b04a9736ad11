//! Display helpers keyed on weather metric names.
//!
//! Metric names follow the weather API's conventions
//! (`temperature_2m`, `soil_moisture_9_to_27cm`, `wind_speed_80m`, ...).
//! Units and precision are derived by substring match so that depth or
//! height suffixes (`_2m`, `_18cm`) don't need their own table entries.

/// Unit suffix for a metric, derived from its name.
///
/// Match order matters: `probability` is tested before `precipitation` so
/// that `precipitation_probability` renders as a percentage.
///
/// # Examples
///
/// ```
/// use farmsight_types::unit_suffix;
///
/// assert_eq!(unit_suffix("temperature_2m"), "°C");
/// assert_eq!(unit_suffix("soil_moisture_9_to_27cm"), "m³/m³");
/// assert_eq!(unit_suffix("wind_direction_80m"), "°");
/// assert_eq!(unit_suffix("unknown_metric"), "");
/// ```
#[must_use]
pub fn unit_suffix(metric: &str) -> &'static str {
    if metric.contains("temperature") {
        "°C"
    } else if metric.contains("humidity") || metric.contains("probability") {
        "%"
    } else if metric.contains("precipitation") {
        "mm"
    } else if metric.contains("wind_speed") {
        "km/h"
    } else if metric.contains("wind_direction") {
        "°"
    } else if metric.contains("moisture") {
        "m³/m³"
    } else {
        ""
    }
}

/// Decimal places used when rendering a metric value.
///
/// Soil moisture is reported in m³/m³ where the third decimal is
/// meaningful; everything else renders at chart precision.
#[must_use]
pub fn decimals_for(metric: &str) -> usize {
    if metric.contains("moisture") { 3 } else { 1 }
}

/// Format a value for display at the metric's precision.
///
/// # Examples
///
/// ```
/// use farmsight_types::format_value;
///
/// assert_eq!(format_value(0.12345, "soil_moisture_9_to_27cm"), "0.123");
/// assert_eq!(format_value(21.567, "temperature_2m"), "21.6");
/// ```
#[must_use]
pub fn format_value(value: f64, metric: &str) -> String {
    format!("{:.*}", decimals_for(metric), value)
}
