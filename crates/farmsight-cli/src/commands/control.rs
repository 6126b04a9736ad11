//! Control command implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use farmsight_core::DeviceClient;
use farmsight_types::SensorCommand;

use crate::cli::OutputFormat;
use crate::format;

/// Delay between sending a command and reading back the confirmed state,
/// giving the firmware time to actuate.
const CONFIRM_DELAY: Duration = Duration::from_millis(500);

pub async fn cmd_control(
    device_url: &str,
    command: &str,
    state: &str,
    format: OutputFormat,
) -> Result<()> {
    let state = SensorCommand::parse_state(state).context("invalid state (expected on or off)")?;
    let command = SensorCommand::from_name(command, state).context(
        "unknown command (expected waterPumpActive, waterPumpAutomatic, or speakerEnabled)",
    )?;

    let client = DeviceClient::new(device_url)?;
    client.send_command(&command).await?;

    tokio::time::sleep(CONFIRM_DELAY).await;
    let snapshot = client.read_data().await?;

    match format {
        OutputFormat::Json => format::print_json(&snapshot)?,
        OutputFormat::Text => {
            println!("Sent {command}.");
            println!();
            format::print_snapshot(&snapshot);
        }
    }
    Ok(())
}
