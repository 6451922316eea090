//! Store error types

use thiserror::Error;

/// Durable storage failures
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem or OS level failure
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Backend refused the write because it is full
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// Backend is disabled or cannot be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by [`crate::ThemeStore`] loading and saving.
///
/// None of these are fatal: the store logs them and keeps serving the
/// in-memory config.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    StorageUnavailable(#[from] StorageError),

    /// The stored record is not a complete, valid config
    #[error("invalid stored theme config: {0}")]
    InvalidStoredConfig(#[from] serde_json::Error),

    #[error("failed to serialize theme config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
