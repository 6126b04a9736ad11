//! Configuration file management.
//!
//! Settings load from `farmsight/config.toml` under the user config
//! directory, then `FARMSIGHT_*` environment variables override file
//! values. The resolved config is built once in main and passed down;
//! nothing reads it ambiently.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default field-device URL (the firmware's access-point address).
const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";

/// Default inference server URL.
const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:8000";

/// Default hourly weather API endpoint.
const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Field device base URL
    pub device_url: String,

    /// Inference server base URL
    pub inference_url: String,

    /// Hourly weather API base URL
    pub weather_url: String,

    /// Farm latitude for weather queries
    pub latitude: f64,

    /// Farm longitude for weather queries
    pub longitude: f64,

    /// Device poll interval in milliseconds
    pub device_poll_ms: u64,

    /// Analysis poll interval in seconds
    pub analysis_poll_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_url: DEFAULT_DEVICE_URL.to_string(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            // Fallback position when the config carries no coordinates.
            latitude: 51.5074,
            longitude: -0.1278,
            device_poll_ms: 3500,
            analysis_poll_secs: 30,
        }
    }
}

impl Config {
    /// Path of the config file under the user config directory.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("farmsight").join("config.toml"))
    }

    /// Load from the default path (if present), then apply env overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load from a specific TOML file. Missing keys keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("FARMSIGHT_DEVICE_URL") {
            self.device_url = url;
        }
        if let Ok(url) = std::env::var("FARMSIGHT_INFERENCE_URL") {
            self.inference_url = url;
        }
        if let Ok(url) = std::env::var("FARMSIGHT_WEATHER_URL") {
            self.weather_url = url;
        }
        if let Ok(value) = std::env::var("FARMSIGHT_LATITUDE") {
            match value.parse() {
                Ok(latitude) => self.latitude = latitude,
                Err(_) => tracing::warn!(value = %value, "ignoring unparseable FARMSIGHT_LATITUDE"),
            }
        }
        if let Ok(value) = std::env::var("FARMSIGHT_LONGITUDE") {
            match value.parse() {
                Ok(longitude) => self.longitude = longitude,
                Err(_) => tracing::warn!(value = %value, "ignoring unparseable FARMSIGHT_LONGITUDE"),
            }
        }
    }
}
