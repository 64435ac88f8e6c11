//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The store refused the write because it is full.
    #[error("Storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },

    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Whether the error came from a full store rather than a broken one.
    pub fn is_quota(&self) -> bool {
        matches!(self, StoreError::QuotaExceeded { .. })
    }
}
