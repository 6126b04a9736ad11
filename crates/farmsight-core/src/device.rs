//! HTTP client for the field device's embedded server.
//!
//! The device exposes two endpoints: `GET /data` returns the full
//! [`SensorSnapshot`] as JSON, and `POST /control` accepts
//! `{"command": <name>, "state": <bool>}` for the actuator toggles.
//!
//! # Example
//!
//! ```no_run
//! use farmsight_core::DeviceClient;
//! use farmsight_types::SensorCommand;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DeviceClient::new("http://192.168.1.50")?;
//!
//! let snapshot = client.read_data().await?;
//! println!("Soil moisture: {:.1}%", snapshot.soil_moisture);
//!
//! client.send_command(&SensorCommand::WaterPumpActive(true)).await?;
//! Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use farmsight_types::{SensorCommand, SensorSnapshot};

use crate::error::Result;
use crate::http;
use crate::source::SnapshotSource;

/// HTTP client for the field device.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: Client,
    base_url: String,
}

/// Wire body for `POST /control`.
#[derive(Debug, Serialize)]
struct ControlRequest<'a> {
    command: &'a str,
    state: bool,
}

impl DeviceClient {
    /// Create a new device client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The device's base URL (e.g. "http://192.168.1.50")
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

    /// Read the device's current sensor snapshot.
    pub async fn read_data(&self) -> Result<SensorSnapshot> {
        let url = format!("{}/data", self.base_url);
        http::get_json(&self.client, &url).await
    }

    /// Send an actuator toggle to the device.
    ///
    /// Success means the device acknowledged the command with a 2xx; the
    /// new state is confirmed by a follow-up [`read_data`](Self::read_data).
    pub async fn send_command(&self, command: &SensorCommand) -> Result<()> {
        let url = format!("{}/control", self.base_url);
        let body = ControlRequest {
            command: command.name(),
            state: command.state(),
        };
        debug!(command = command.name(), state = command.state(), "sending device command");
        http::post_command(&self.client, &url, &body).await
    }
}

#[async_trait]
impl SnapshotSource for DeviceClient {
    type Snapshot = SensorSnapshot;
    type Command = SensorCommand;

    async fn fetch(&self) -> Result<SensorSnapshot> {
        self.read_data().await
    }

    async fn send(&self, command: &SensorCommand) -> Result<()> {
        self.send_command(command).await
    }

    fn apply(snapshot: &mut SensorSnapshot, command: &SensorCommand) {
        snapshot.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DeviceClient::new("http://192.168.1.50");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://192.168.1.50");
    }

    #[test]
    fn test_client_normalizes_url() {
        let client = DeviceClient::new("http://192.168.1.50/").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.50");
    }

    #[test]
    fn test_client_rejects_bare_address() {
        assert!(DeviceClient::new("192.168.1.50").is_err());
    }

    #[test]
    fn test_control_request_wire_shape() {
        let body = ControlRequest {
            command: "waterPumpActive",
            state: true,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"command":"waterPumpActive","state":true}"#);
    }
}
