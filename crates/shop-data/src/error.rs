//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to a storefront API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("request failed: {0}")]
    Request(String),

    /// Non-success HTTP response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// JSON serialization error while building a request.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
