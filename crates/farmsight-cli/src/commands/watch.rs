//! Watch command implementation.
//!
//! Runs the polling synchronizer against the field device and prints one
//! line per committed state change. Ctrl-C stops the poll task cleanly.

use std::time::Duration;

use anyhow::Result;
use farmsight_core::{DeviceClient, SyncOptions, Synchronizer};

use crate::cli::OutputFormat;
use crate::format;

/// Arguments for the watch command.
pub struct WatchArgs<'a> {
    pub device_url: &'a str,
    pub interval: Duration,
    pub count: u32,
    pub format: OutputFormat,
}

pub async fn cmd_watch(args: WatchArgs<'_>) -> Result<()> {
    let client = DeviceClient::new(args.device_url)?;
    let sync = Synchronizer::start(client, SyncOptions::with_interval(args.interval))?;
    let mut rx = sync.subscribe();
    let mut printed: u32 = 0;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nShutting down...");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                match args.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string(&state.snapshot)?),
                    OutputFormat::Text => println!("{}", format::watch_line(&state)),
                }
                printed += 1;
                if args.count > 0 && printed >= args.count {
                    eprintln!("Completed {printed} updates.");
                    break;
                }
            }
        }
    }

    sync.stop();
    Ok(())
}
