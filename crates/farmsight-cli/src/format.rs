//! Output formatting for text and JSON.

use anyhow::Result;
use farmsight_core::{SampledPoint, SyncState};
use farmsight_types::{AnalysisSnapshot, MarketInsight, SensorSnapshot};
use time::macros::format_description;

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Print a sensor snapshot as aligned label/value rows.
pub fn print_snapshot(snapshot: &SensorSnapshot) {
    println!("{:<18} {:>8.1} °C", "Temperature", snapshot.temperature);
    println!("{:<18} {:>8.1} %", "Humidity", snapshot.humidity);
    println!("{:<18} {:>8.1} %", "Soil moisture", snapshot.soil_moisture);
    println!("{:<18} {:>8.1} %", "Rain detection", snapshot.rain_detection);
    println!("{:<18} {:>8.1} %", "Light intensity", snapshot.light_intensity);
    println!("{:<18} {:>8}", "Flame detected", yes_no(snapshot.flame_detected));
    println!("{:<18} {:>8}", "Water pump", on_off(snapshot.water_pump_active));
    println!("{:<18} {:>8}", "Pump automatic", on_off(snapshot.water_pump_automatic));
    println!("{:<18} {:>8}", "Speaker", on_off(snapshot.speaker_enabled));
    println!("{:<18} {:>8.0} °", "Scan servo", snapshot.scan_servo_position);
    println!("{:<18} {:>8.0} °", "Tilt servo", snapshot.tilt_servo_position);
}

/// One-line summary of a synchronized state, for watch mode.
pub fn watch_line(state: &SyncState<SensorSnapshot>) -> String {
    let stamp = state
        .updated_at
        .and_then(|t| t.format(&format_description!("[hour]:[minute]:[second]")).ok())
        .unwrap_or_else(|| "--:--:--".to_string());

    if let Some(error) = &state.last_error {
        return format!("[{stamp}] fetch failed: {error} (showing last good data)");
    }

    let snapshot = &state.snapshot;
    format!(
        "[{stamp}] temp {:.1}°C  humidity {:.1}%  soil {:.1}%  light {:.1}%  pump {}  auto {}  speaker {}{}",
        snapshot.temperature,
        snapshot.humidity,
        snapshot.soil_moisture,
        snapshot.light_intensity,
        on_off(snapshot.water_pump_active),
        on_off(snapshot.water_pump_automatic),
        on_off(snapshot.speaker_enabled),
        if snapshot.flame_detected {
            "  FLAME DETECTED"
        } else {
            ""
        },
    )
}

fn print_section(title: &str, body: Option<&str>) {
    let Some(body) = body else { return };
    if body.trim().is_empty() {
        return;
    }
    println!();
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
    println!("{body}");
}

/// Print an analysis snapshot with its advisory sections.
pub fn print_analysis(snapshot: &AnalysisSnapshot) {
    let verdict = if snapshot.is_healthy() {
        "healthy"
    } else {
        "attention needed"
    };
    println!("Prediction: {} ({verdict})", snapshot.prediction.disease);
    if let Some(timestamp) = &snapshot.prediction.timestamp {
        println!("Analyzed:   {timestamp}");
    }
    if let Some(image) = &snapshot.image {
        println!("Image:      {image}");
    }
    print_section("About", snapshot.prediction.about.as_deref());
    print_section("Causes", snapshot.prediction.causes.as_deref());
    print_section("Treatment Plan", snapshot.prediction.treatment_plan.as_deref());
}

/// Print market insight rows for a crop, skipping empty fields.
pub fn print_market(crop: &str, insight: &MarketInsight) {
    println!("Market insights for {crop}");
    println!();
    let rows = [
        ("Current price", &insight.current_price),
        ("Average price", &insight.average_price),
        ("Selling advice", &insight.selling_advice),
        ("Insights", &insight.insights),
        ("Demand", &insight.demand),
        ("Supply", &insight.supply),
        ("Policy", &insight.policy),
        ("Risk alert", &insight.risk),
    ];
    for (label, value) in rows {
        if !value.is_empty() {
            println!("{label:<16} {value}");
        }
    }
}

/// Print sampled forecast points as day/time/value rows.
pub fn print_forecast(metric: &str, points: &[SampledPoint]) {
    if points.is_empty() {
        println!("No forecast data for {metric}.");
        return;
    }
    println!("{:<8} {:<18} {:>14}", "Day", "Time", metric);
    for point in points {
        println!("{:<8} {:<18} {:>14}", point.label, point.time, point.display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_line_reports_error() {
        let mut state = SyncState::<SensorSnapshot>::default();
        state.last_error = Some("connection refused".to_string());
        let line = watch_line(&state);
        assert!(line.contains("fetch failed: connection refused"));
        assert!(line.contains("--:--:--"));
    }

    #[test]
    fn test_watch_line_flags_flame() {
        let mut state = SyncState::<SensorSnapshot>::default();
        state.snapshot.flame_detected = true;
        assert!(watch_line(&state).contains("FLAME DETECTED"));

        state.snapshot.flame_detected = false;
        assert!(!watch_line(&state).contains("FLAME"));
    }
}
