//! HTTP client for the public hourly weather API.
//!
//! Each chart fetches one metric independently:
//! `GET {base}?latitude=..&longitude=..&hourly=<metric>` returns
//! `{"hourly": {"time": [...], "<metric>": [...]}}`. The metric key is
//! dynamic, so the hourly block deserializes the non-`time` arrays into a
//! flattened map and the requested metric is extracted afterwards.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;

use farmsight_types::HourlySeries;

use crate::error::{Error, Result};
use crate::http;

/// Geographic position used in weather queries.
///
/// Callers without a configured position fall back to a fixed default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        // London, the fallback used when no location permission is granted.
        Self {
            latitude: 51.5074,
            longitude: -0.1278,
        }
    }
}

/// HTTP client for hourly weather forecasts.
///
/// # Example
///
/// ```no_run
/// use farmsight_core::{Coordinates, WeatherClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WeatherClient::new("https://api.open-meteo.com/v1/forecast")?;
/// let series = client
///     .hourly(Coordinates::default(), "temperature_2m")
///     .await?;
/// println!("{} hourly points", series.len());
/// Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: ForecastHourly,
}

#[derive(Debug, Deserialize)]
struct ForecastHourly {
    time: Vec<String>,
    #[serde(flatten)]
    metrics: HashMap<String, Vec<f64>>,
}

impl WeatherClient {
    /// Create a new weather client.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: http::build_client()?,
            base_url: http::normalize_base_url(base_url)?,
        })
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: http::normalize_base_url(base_url)?,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the hourly series for one metric at the given position.
    pub async fn hourly(&self, position: Coordinates, metric: &str) -> Result<HourlySeries> {
        let url = format!(
            "{}?latitude={}&longitude={}&hourly={}",
            self.base_url, position.latitude, position.longitude, metric
        );
        let response: ForecastResponse = http::get_json(&self.client, &url).await?;
        extract_series(response, metric)
    }
}

fn extract_series(mut response: ForecastResponse, metric: &str) -> Result<HourlySeries> {
    let values = response
        .hourly
        .metrics
        .remove(metric)
        .ok_or_else(|| Error::invalid_data(format!("hourly response missing metric '{}'", metric)))?;

    HourlySeries::new(metric, response.hourly.time, values).ok_or_else(|| {
        Error::invalid_data(format!(
            "hourly time and {} arrays have different lengths",
            metric
        ))
    })
}
