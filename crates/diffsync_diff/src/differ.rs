//! Differencing trait definition.

use crate::error::DiffResult;
use diffsync_protocol::{DiffOp, Document, Edit, Shadow};

/// A text differencing collaborator.
///
/// The sync engine computes outbound edits and applies inbound ones
/// through this trait; the diff algorithm itself is opaque to it.
///
/// # Invariants
///
/// - `diff(a, b)` returns operations that, applied to `a`, reproduce `b`
/// - two empty inputs produce an empty sequence
/// - two equal non-empty inputs produce a single `UNCHANGED` operation
///   covering the whole text
/// - implementations must be `Send + Sync` for concurrent use
pub trait Differ: Send + Sync {
    /// Returns ordered diff operations transforming `a` into `b`.
    fn diff(&self, a: &str, b: &str) -> Vec<DiffOp>;

    /// Applies `edit`'s operations to `doc`'s content, returning the
    /// patched document.
    ///
    /// # Errors
    ///
    /// Returns an error if the operations do not match the document text.
    fn patch_document(&self, edit: &Edit, doc: &Document) -> DiffResult<Document>;

    /// Diffs from `shadow`'s content to `doc`'s content, tagged with
    /// the shadow's version pair.
    ///
    /// Convenience for callers constructing an outbound [`Edit`].
    fn client_diff(&self, doc: &Document, shadow: &Shadow) -> Edit {
        Edit::against(shadow, self.diff(&shadow.content, &doc.content))
    }
}
