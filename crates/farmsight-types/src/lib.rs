//! Platform-agnostic types for farmsight field monitoring.
//!
//! This crate defines the data model shared by every farmsight component:
//! sensor snapshots reported by the field device, plant-disease analysis
//! results from the inference server, market-insight lookups, and hourly
//! weather series. All wire types carry serde derives whose field names
//! match the external JSON contracts exactly.
//!
//! No I/O lives here; HTTP clients and polling belong to `farmsight-core`.

pub mod analysis;
pub mod error;
pub mod market;
pub mod metric;
pub mod series;
pub mod snapshot;

pub use analysis::{AnalysisSnapshot, Prediction};
pub use error::{ParseError, ParseResult};
pub use market::{MarketInsight, MarketResponse};
pub use metric::{decimals_for, format_value, unit_suffix};
pub use series::HourlySeries;
pub use snapshot::{SensorCommand, SensorSnapshot};
