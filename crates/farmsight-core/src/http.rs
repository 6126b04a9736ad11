//! Shared HTTP plumbing for the endpoint clients.
//!
//! All three clients (device, inference, weather) speak plain JSON over
//! HTTP with the same conventions: a normalized base URL, a bounded request
//! timeout, and non-2xx responses mapped to a structured API error that
//! prefers the body's `error` field over the bare status line.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Default per-request timeout for all endpoint clients.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Validate and normalize a base URL (strip trailing slash, require scheme).
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String> {
    let base_url = base_url.trim_end_matches('/').to_string();

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(Error::InvalidUrl(format!(
            "URL must start with http:// or https://, got: {}",
            base_url
        )));
    }

    Ok(base_url)
}

/// Build the shared reqwest client with the default timeout.
pub(crate) fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(Error::Request)
}

/// `GET url` and decode a JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::NotReachable {
            url: url.to_string(),
            source: e,
        })?;

    handle_response(response).await
}

/// `POST url` with a JSON body and decode a JSON response.
pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| Error::NotReachable {
            url: url.to_string(),
            source: e,
        })?;

    handle_response(response).await
}

/// `POST url` with a JSON body, expecting only a success status back.
///
/// The device's `/control` endpoint answers 2xx with an empty or free-form
/// body, so no decode is attempted.
pub(crate) async fn post_command<B: Serialize>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<()> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| Error::NotReachable {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Api {
            status: status.as_u16(),
            message: error_message(response, status).await,
        })
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(Error::Request)
    } else {
        Err(Error::Api {
            status: status.as_u16(),
            message: error_message(response, status).await,
        })
    }
}

async fn error_message(response: reqwest::Response, status: reqwest::StatusCode) -> String {
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| status.to_string())
}
