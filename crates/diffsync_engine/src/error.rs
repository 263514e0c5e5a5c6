//! Error types for the sync engine.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur during sync operations.
///
/// Stale or duplicate edits are *not* errors: correctness under
/// at-least-once delivery requires them to be discarded silently.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No document exists for the given id.
    ///
    /// `diff` and `patch` require a prior subscription via
    /// `add_document`; the engine does not fabricate state.
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// No shadow exists for the (document, client) pair.
    #[error("shadow not found for document {id}, client {client_id}")]
    ShadowNotFound {
        /// Document identifier.
        id: String,
        /// Client identifier.
        client_id: String,
    },

    /// The store failed.
    #[error("store error: {0}")]
    Store(#[from] diffsync_store::StoreError),

    /// An inbound edit could not be applied to the document.
    #[error("patch error: {0}")]
    Patch(#[from] diffsync_diff::DiffError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SyncError::DocumentNotFound("1234".into());
        assert_eq!(err.to_string(), "document not found: 1234");

        let err = SyncError::ShadowNotFound {
            id: "1234".into(),
            client_id: "client-1".into(),
        };
        assert!(err.to_string().contains("1234"));
        assert!(err.to_string().contains("client-1"));
    }
}
