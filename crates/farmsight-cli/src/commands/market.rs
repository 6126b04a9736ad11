//! Market insight lookup.

use anyhow::Result;
use farmsight_core::InferenceClient;

use crate::cli::OutputFormat;
use crate::format;

pub async fn cmd_market(inference_url: &str, crop: &str, format: OutputFormat) -> Result<()> {
    let client = InferenceClient::new(inference_url)?;
    let insight = client.search_market(crop).await?;

    match format {
        OutputFormat::Json => format::print_json(&insight)?,
        OutputFormat::Text => format::print_market(crop, &insight),
    }
    Ok(())
}
