//! Weekly forecast sampling.

use anyhow::Result;
use farmsight_core::{Coordinates, WeatherClient, sample_forecast};
use time::OffsetDateTime;

use crate::cli::OutputFormat;
use crate::format;

/// Arguments for the forecast command.
pub struct ForecastArgs<'a> {
    pub weather_url: &'a str,
    pub metric: &'a str,
    pub position: Coordinates,
    pub format: OutputFormat,
}

pub async fn cmd_forecast(args: ForecastArgs<'_>) -> Result<()> {
    let client = WeatherClient::new(args.weather_url)?;
    let series = client.hourly(args.position, args.metric).await?;

    let today = OffsetDateTime::now_utc().date();
    let points = sample_forecast(&series, today);

    match args.format {
        OutputFormat::Json => format::print_json(&points)?,
        OutputFormat::Text => format::print_forecast(&series.metric, &points),
    }
    Ok(())
}
