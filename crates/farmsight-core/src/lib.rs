//! Core client library for farmsight field monitoring.
//!
//! This crate keeps local state in step with the remote collaborators of a
//! farm-monitoring deployment: the field device's embedded HTTP server, the
//! plant-disease inference server, and a public hourly weather API.
//!
//! # Features
//!
//! - **Typed HTTP clients**: device data/control, analysis snapshots,
//!   market-insight lookups, hourly weather series
//! - **Polling synchronizer**: interval re-fetch with sequence-tagged
//!   commits (last-issued-wins), optimistic command patching with delayed
//!   reconciliation, and cancel-on-drop teardown
//! - **Forecast sampler**: seven chart-ready points anchored to yesterday
//!   and today noon
//! - **Mock source**: scripted fetches and failure injection for tests
//!
//! # Quick Start
//!
//! ```no_run
//! use farmsight_core::{DeviceClient, SyncOptions, Synchronizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeviceClient::new("http://192.168.1.50")?;
//!     let sync = Synchronizer::start(client, SyncOptions::device())?;
//!
//!     let mut rx = sync.subscribe();
//!     rx.changed().await?;
//!     let state = rx.borrow().clone();
//!     println!("soil moisture: {:.1}%", state.snapshot.soil_moisture);
//!
//!     sync.stop();
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod error;
mod http;
pub mod inference;
pub mod mock;
pub mod sampler;
pub mod source;
pub mod sync;
pub mod weather;

// Core exports
pub use device::DeviceClient;
pub use error::{Error, Result};
pub use inference::InferenceClient;
pub use mock::MockSource;
pub use sampler::{SampledPoint, sample_forecast};
pub use source::{NoCommand, SnapshotSource};
pub use sync::{SyncOptions, SyncState, Synchronizer};
pub use weather::{Coordinates, WeatherClient};

// Re-export the data model for downstream convenience
pub use farmsight_types as types;
pub use farmsight_types::{
    AnalysisSnapshot, HourlySeries, MarketInsight, Prediction, SensorCommand, SensorSnapshot,
};
