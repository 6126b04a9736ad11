//! Sensor snapshot and control command types for the field device.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Last known state of the field device.
///
/// The device's embedded HTTP server reports all values in a single JSON
/// object; the snapshot is replaced wholesale on each successful poll.
/// Field names on the wire are camelCase, matching the device firmware.
///
/// Every field carries `#[serde(default)]` so a device reporting a partial
/// payload (e.g. older firmware without servo fields) still parses.
///
/// # Examples
///
/// ```
/// use farmsight_types::SensorSnapshot;
///
/// let snapshot = SensorSnapshot::default();
/// assert_eq!(snapshot.temperature, 0.0);
/// assert!(!snapshot.water_pump_active);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensorSnapshot {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Soil moisture in %.
    pub soil_moisture: f64,
    /// Rain detection level in %.
    pub rain_detection: f64,
    /// Whether the flame sensor is currently triggered.
    pub flame_detected: bool,
    /// Ambient light intensity in %.
    pub light_intensity: f64,
    /// Whether the water pump is running.
    pub water_pump_active: bool,
    /// Whether the pump is in automatic (moisture-driven) mode.
    pub water_pump_automatic: bool,
    /// Whether the deterrent speaker is enabled.
    pub speaker_enabled: bool,
    /// Horizontal scan servo position.
    pub scan_servo_position: f64,
    /// Camera tilt servo position.
    pub tilt_servo_position: f64,
}

impl SensorSnapshot {
    /// Apply a control command to the snapshot.
    ///
    /// This is the optimistic-update path: the single field named by the
    /// command is patched locally before the device confirms via re-fetch.
    pub fn apply(&mut self, command: &SensorCommand) {
        match *command {
            SensorCommand::WaterPumpActive(state) => self.water_pump_active = state,
            SensorCommand::WaterPumpAutomatic(state) => self.water_pump_automatic = state,
            SensorCommand::SpeakerEnabled(state) => self.speaker_enabled = state,
        }
    }
}

/// A boolean toggle accepted by the device's `/control` endpoint.
///
/// The control surface is deliberately narrow: the device accepts
/// `{"command": <name>, "state": <bool>}` for the three actuator toggles
/// it exposes. Sensor values and servo positions are read-only.
///
/// # Examples
///
/// ```
/// use farmsight_types::SensorCommand;
///
/// let cmd = SensorCommand::WaterPumpActive(true);
/// assert_eq!(cmd.name(), "waterPumpActive");
/// assert!(cmd.state());
///
/// let parsed: SensorCommand = "speakerEnabled=off".parse().unwrap();
/// assert_eq!(parsed, SensorCommand::SpeakerEnabled(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorCommand {
    /// Start or stop the water pump.
    WaterPumpActive(bool),
    /// Enable or disable automatic pump mode.
    WaterPumpAutomatic(bool),
    /// Enable or disable the deterrent speaker.
    SpeakerEnabled(bool),
}

impl SensorCommand {
    /// The wire name sent in the control request's `command` field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WaterPumpActive(_) => "waterPumpActive",
            Self::WaterPumpAutomatic(_) => "waterPumpAutomatic",
            Self::SpeakerEnabled(_) => "speakerEnabled",
        }
    }

    /// The requested state sent in the control request's `state` field.
    #[must_use]
    pub fn state(&self) -> bool {
        match *self {
            Self::WaterPumpActive(state)
            | Self::WaterPumpAutomatic(state)
            | Self::SpeakerEnabled(state) => state,
        }
    }

    /// Build a command from a wire name and a state.
    pub fn from_name(name: &str, state: bool) -> Result<Self, ParseError> {
        match name {
            "waterPumpActive" => Ok(Self::WaterPumpActive(state)),
            "waterPumpAutomatic" => Ok(Self::WaterPumpAutomatic(state)),
            "speakerEnabled" => Ok(Self::SpeakerEnabled(state)),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    /// Parse an on/off-style state string.
    pub fn parse_state(value: &str) -> Result<bool, ParseError> {
        match value.to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Ok(true),
            "off" | "false" | "0" => Ok(false),
            other => Err(ParseError::InvalidState(other.to_string())),
        }
    }
}

impl fmt::Display for SensorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.name(),
            if self.state() { "on" } else { "off" }
        )
    }
}

impl FromStr for SensorCommand {
    type Err = ParseError;

    /// Parse a `name=state` pair, e.g. `waterPumpActive=on`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, state) = s
            .split_once('=')
            .ok_or_else(|| ParseError::UnknownCommand(s.to_string()))?;
        let state = Self::parse_state(state.trim())?;
        Self::from_name(name.trim(), state)
    }
}
