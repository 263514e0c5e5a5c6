//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying backend failed.
    ///
    /// The in-memory store never produces this; it exists for
    /// implementations backed by real persistence.
    #[error("store backend error: {0}")]
    Backend(String),
}
