//! Latest plant-disease analysis.

use anyhow::Result;
use farmsight_core::InferenceClient;

use crate::cli::OutputFormat;
use crate::format;

pub async fn cmd_analysis(inference_url: &str, format: OutputFormat) -> Result<()> {
    let client = InferenceClient::new(inference_url)?;
    let snapshot = client.latest_snapshot().await?;

    match format {
        OutputFormat::Json => format::print_json(&snapshot)?,
        OutputFormat::Text => format::print_analysis(&snapshot),
    }
    Ok(())
}
