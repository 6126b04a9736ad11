//! Market-insight lookup results.

use serde::{Deserialize, Serialize};

/// Envelope returned by the inference server's `POST /searchdata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketResponse {
    /// The insight record for the queried crop.
    #[serde(default)]
    pub market_insights: MarketInsight,
}

/// Market analysis for one crop query.
///
/// All fields are free-form text synthesized by the server; prices are kept
/// as strings because the server does not guarantee a numeric format.
/// A record is superseded by the next query and never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsight {
    /// Current market price.
    #[serde(rename = "Current Price", default)]
    pub current_price: String,
    /// Recent average price.
    #[serde(rename = "Average Price", default)]
    pub average_price: String,
    /// Whether/when to sell.
    #[serde(rename = "Selling Advice", default)]
    pub selling_advice: String,
    /// General market commentary.
    #[serde(rename = "Market Insights", default)]
    pub insights: String,
    /// Demand outlook.
    #[serde(rename = "Market Demand", default)]
    pub demand: String,
    /// Supply outlook.
    #[serde(rename = "Market Supply", default)]
    pub supply: String,
    /// Relevant government policy.
    #[serde(rename = "Government Policy", default)]
    pub policy: String,
    /// Risk warnings.
    #[serde(rename = "Risk Alert", default)]
    pub risk: String,
}
