use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use farmsight_core::Coordinates;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod format;

use cli::{Cli, Commands};
use commands::forecast::ForecastArgs;
use commands::watch::WatchArgs;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load()?;

    match cli.command {
        Commands::Sensors { device_url } => {
            let url = device_url.as_deref().unwrap_or(&config.device_url);
            commands::sensors::cmd_sensors(url, cli.format).await
        }
        Commands::Watch {
            device_url,
            interval,
            count,
        } => {
            let url = device_url.as_deref().unwrap_or(&config.device_url);
            let interval = Duration::from_millis(interval.unwrap_or(config.device_poll_ms));
            commands::watch::cmd_watch(WatchArgs {
                device_url: url,
                interval,
                count,
                format: cli.format,
            })
            .await
        }
        Commands::Control {
            command,
            state,
            device_url,
        } => {
            let url = device_url.as_deref().unwrap_or(&config.device_url);
            commands::control::cmd_control(url, &command, &state, cli.format).await
        }
        Commands::Analysis { inference_url } => {
            let url = inference_url.as_deref().unwrap_or(&config.inference_url);
            commands::analysis::cmd_analysis(url, cli.format).await
        }
        Commands::Market {
            crop,
            inference_url,
        } => {
            let url = inference_url.as_deref().unwrap_or(&config.inference_url);
            commands::market::cmd_market(url, &crop, cli.format).await
        }
        Commands::Forecast {
            metric,
            lat,
            lon,
            weather_url,
        } => {
            let url = weather_url.as_deref().unwrap_or(&config.weather_url);
            let position = Coordinates {
                latitude: lat.unwrap_or(config.latitude),
                longitude: lon.unwrap_or(config.longitude),
            };
            commands::forecast::cmd_forecast(ForecastArgs {
                weather_url: url,
                metric: &metric,
                position,
                format: cli.format,
            })
            .await
        }
    }
}
