//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store.
    #[error("failed to open store: {0}")]
    Open(String),

    /// Failed to serialize or deserialize a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to perform a store operation.
    #[error("store operation failed: {0}")]
    Backend(String),
}
