//! Version-tagged diff operations.

use crate::shadow::Shadow;
use serde::{Deserialize, Serialize};

/// Kind of a single diff operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Text present in the target but not the source.
    Insert,
    /// Text present in the source but not the target.
    Delete,
    /// Text identical in both states.
    ///
    /// A single `Unchanged` operation covering a whole document is also
    /// how full content is transmitted to a newly subscribed client.
    Unchanged,
}

/// One diff operation: a kind and the span of text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOp {
    /// The operation kind.
    pub operation: Operation,
    /// The text the operation covers.
    pub text: String,
}

impl DiffOp {
    /// Creates an insert operation.
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            operation: Operation::Insert,
            text: text.into(),
        }
    }

    /// Creates a delete operation.
    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            operation: Operation::Delete,
            text: text.into(),
        }
    }

    /// Creates an unchanged operation.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            operation: Operation::Unchanged,
            text: text.into(),
        }
    }
}

/// An ordered list of diff operations plus the version pair it is
/// relative to.
///
/// An `Edit` is only meaningful against the shadow state identified by
/// its `(server_version, client_version)` pair; the engine's version
/// check decides whether it can be applied, recovered via backup, or
/// must be discarded as stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edit {
    /// Document identifier.
    pub id: String,
    /// The client this edit belongs to.
    pub client_id: String,
    /// Server round the edit was computed against.
    pub server_version: i64,
    /// Client round that produced the edit.
    pub client_version: i64,
    /// Ordered diff operations.
    pub diffs: Vec<DiffOp>,
}

impl Edit {
    /// Creates an edit tagged with `shadow`'s version pair.
    pub fn against(shadow: &Shadow, diffs: Vec<DiffOp>) -> Self {
        Self {
            id: shadow.id.clone(),
            client_id: shadow.client_id.clone(),
            server_version: shadow.server_version,
            client_version: shadow.client_version,
            diffs,
        }
    }

    /// Returns true if no operation actually changes text.
    ///
    /// An edit consisting only of `Unchanged` operations re-confirms
    /// baseline state but does not modify the document it is applied to.
    pub fn is_unchanged(&self) -> bool {
        self.diffs
            .iter()
            .all(|d| d.operation == Operation::Unchanged)
    }
}
