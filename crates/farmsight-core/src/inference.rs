//! HTTP client for the plant-disease inference server.
//!
//! The inference server owns the camera pipeline and the classifier; this
//! client only reads its conclusions. Two endpoints are consumed:
//! `GET /latest_snapshot` for the newest [`AnalysisSnapshot`] and
//! `POST /searchdata` for crop market-insight queries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use farmsight_types::{AnalysisSnapshot, MarketInsight, MarketResponse};

use crate::error::{Error, Result};
use crate::http;
use crate::source::{NoCommand, SnapshotSource};

/// HTTP client for the inference server.
///
/// # Example
///
/// ```no_run
/// use farmsight_core::InferenceClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = InferenceClient::new("http://192.168.1.20:8000")?;
///
/// let analysis = client.latest_snapshot().await?;
/// println!("Verdict: {}", analysis.prediction.disease);
///
/// let market = client.search_market("wheat").await?;
/// println!("Advice: {}", market.selling_advice);
/// Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
}

/// Wire body for `POST /searchdata`.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

impl InferenceClient {
    /// Create a new inference-server client.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: http::build_client()?,
            base_url: http::normalize_base_url(base_url)?,
        })
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: http::normalize_base_url(base_url)?,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the most recent analysis snapshot.
    pub async fn latest_snapshot(&self) -> Result<AnalysisSnapshot> {
        let url = format!("{}/latest_snapshot", self.base_url);
        http::get_json(&self.client, &url).await
    }

    /// Look up market insights for a crop.
    ///
    /// Blank queries are rejected locally; the server would answer with an
    /// empty synthesis otherwise.
    pub async fn search_market(&self, crop: &str) -> Result<MarketInsight> {
        let crop = crop.trim();
        if crop.is_empty() {
            return Err(Error::invalid_data("market query must not be blank"));
        }

        let url = format!("{}/searchdata", self.base_url);
        let body = SearchRequest { query: crop };
        let response: MarketResponse = http::post_json(&self.client, &url, &body).await?;
        Ok(response.market_insights)
    }
}

#[async_trait]
impl SnapshotSource for InferenceClient {
    type Snapshot = AnalysisSnapshot;
    type Command = NoCommand;

    async fn fetch(&self) -> Result<AnalysisSnapshot> {
        self.latest_snapshot().await
    }

    async fn send(&self, command: &NoCommand) -> Result<()> {
        match *command {}
    }

    fn apply(_snapshot: &mut AnalysisSnapshot, command: &NoCommand) {
        match *command {}
    }
}
