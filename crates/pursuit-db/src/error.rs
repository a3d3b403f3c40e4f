//! Error types for the store backends.
//!
//! Backend-specific failures are collected in [`DbError`] and flattened
//! into [`StoreError`] at the [`CaseStore`](pursuit_core::CaseStore)
//! boundary, so the engine never sees `fred` types.

use pursuit_core::StoreError;

/// Errors that can occur in the store backends.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `Dragonfly`/Redis operation failed.
    #[error("Dragonfly error: {0}")]
    Dragonfly(#[from] fred::error::Error),

    /// A serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A file-system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Serialization(e) => Self::Serialization(e),
            DbError::Io(e) => Self::Io(e),
            DbError::Dragonfly(e) => Self::Backend(format!("Dragonfly error: {e}")),
            DbError::Config(msg) => Self::Backend(msg),
        }
    }
}
