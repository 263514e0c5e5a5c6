//! Default differ backed by `dissimilar`.

use crate::differ::Differ;
use crate::error::{DiffError, DiffResult};
use diffsync_protocol::{DiffOp, Document, Edit, Operation};
use dissimilar::Chunk;

/// A [`Differ`] backed by the `dissimilar` diff-match-patch port.
///
/// # Example
///
/// ```rust
/// use diffsync_diff::{Differ, TextDiffer};
/// use diffsync_protocol::Operation;
///
/// let differ = TextDiffer::new();
/// let ops = differ.diff("shirley", "Shirley");
/// assert_eq!(ops[0].operation, Operation::Delete);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDiffer;

impl TextDiffer {
    /// Creates a new text differ.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Differ for TextDiffer {
    fn diff(&self, a: &str, b: &str) -> Vec<DiffOp> {
        dissimilar::diff(a, b)
            .into_iter()
            .map(|chunk| match chunk {
                Chunk::Equal(text) => DiffOp::unchanged(text),
                Chunk::Delete(text) => DiffOp::delete(text),
                Chunk::Insert(text) => DiffOp::insert(text),
            })
            .collect()
    }

    fn patch_document(&self, edit: &Edit, doc: &Document) -> DiffResult<Document> {
        let mut patched = String::with_capacity(doc.content.len());
        let mut rest = doc.content.as_str();

        for op in &edit.diffs {
            match op.operation {
                Operation::Insert => patched.push_str(&op.text),
                Operation::Unchanged | Operation::Delete => {
                    let next = rest.strip_prefix(op.text.as_str()).ok_or_else(|| {
                        DiffError::ContextMismatch {
                            offset: doc.content.len() - rest.len(),
                            expected: op.text.clone(),
                        }
                    })?;
                    if op.operation == Operation::Unchanged {
                        patched.push_str(&op.text);
                    }
                    rest = next;
                }
            }
        }

        if !rest.is_empty() {
            return Err(DiffError::TrailingContent {
                offset: doc.content.len() - rest.len(),
                remaining: rest.len(),
            });
        }

        Ok(Document::new(doc.id.clone(), patched))
    }
}
