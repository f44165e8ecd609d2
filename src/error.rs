//! Error types for the BitcoinAverage client

use thiserror::Error;

/// Transport-level failures while talking to the API
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Timeout waiting for response
    #[error("Request timeout")]
    Timeout,
}

impl RequestError {
    /// Classifies a reqwest error, splitting out timeouts
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }

    /// Creates a Status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

/// Errors returned by [`BitcoinAverageClient`](crate::client::BitcoinAverageClient)
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request did not complete successfully
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// The API returned the empty-object marker (no data for these parameters)
    #[error("Empty result for {url}")]
    EmptyResult { url: String },

    /// The response body is not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl ClientError {
    /// Creates an EmptyResult error
    pub fn empty_result(url: impl Into<String>) -> Self {
        Self::EmptyResult { url: url.into() }
    }

    /// True if the API was reached but had nothing for the query
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }

    /// True for transport failures (network, timeout, non-success status)
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

/// Result alias used throughout the crate
pub type ClientResult<T> = Result<T, ClientError>;
