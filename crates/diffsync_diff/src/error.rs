//! Error types for patch application.

use thiserror::Error;

/// Result type for diff operations.
pub type DiffResult<T> = Result<T, DiffError>;

/// Errors that can occur while applying an edit to a document.
#[derive(Debug, Error)]
pub enum DiffError {
    /// An `UNCHANGED` or `DELETE` operation did not match the document
    /// text at the position it claims to cover.
    #[error("patch context mismatch at byte {offset}: expected {expected:?}")]
    ContextMismatch {
        /// Byte offset into the document where matching failed.
        offset: usize,
        /// The text the operation expected to find.
        expected: String,
    },

    /// The edit's operations did not cover the whole document.
    #[error("patch left {remaining} uncovered bytes at offset {offset}")]
    TrailingContent {
        /// Byte offset where coverage ended.
        offset: usize,
        /// Number of uncovered bytes.
        remaining: usize,
    },
}
