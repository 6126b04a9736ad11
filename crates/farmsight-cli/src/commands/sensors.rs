//! One-shot sensor read.

use anyhow::Result;
use farmsight_core::DeviceClient;

use crate::cli::OutputFormat;
use crate::format;

pub async fn cmd_sensors(device_url: &str, format: OutputFormat) -> Result<()> {
    let client = DeviceClient::new(device_url)?;
    let snapshot = client.read_data().await?;

    match format {
        OutputFormat::Json => format::print_json(&snapshot)?,
        OutputFormat::Text => format::print_snapshot(&snapshot),
    }
    Ok(())
}
