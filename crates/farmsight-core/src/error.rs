//! Error types for farmsight-core.
//!
//! Every remote collaborator (field device, inference server, weather API)
//! is reached over HTTP, so the error taxonomy is transport failure,
//! non-success status, malformed payload, plus local configuration errors.
//!
//! # Propagation policy
//!
//! Client methods return these errors to their direct caller. Inside the
//! polling synchronizer they are *not* propagated further: a failed poll
//! records the message in the sync state's error field, keeps the last good
//! snapshot, and waits for the next tick. Only command sends and one-shot
//! reads surface errors to the application.

use thiserror::Error;

/// Errors that can occur when talking to farmsight's remote endpoints.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The endpoint is not reachable (connection refused, DNS, timeout).
    #[error("Endpoint not reachable at {url}: {source}")]
    NotReachable {
        /// The URL that was being requested.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP request failed after the endpoint was reached.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, or the status line.
        message: String,
    },

    /// Invalid base URL supplied at client construction.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an invalid-data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias using farmsight-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
