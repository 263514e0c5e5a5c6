//! Server-side documents.

use serde::{Deserialize, Serialize};

/// The server's authoritative content for a document id.
///
/// A `Document` is created once, on the first subscription that carries
/// content, and afterwards is only mutated by successful patch application.
/// Outbound diffs never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque document identifier.
    pub id: String,
    /// The document text.
    #[serde(default)]
    pub content: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Creates a document with empty content.
    ///
    /// Used by clients attaching to an already seeded document without
    /// resending its content.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_new() {
        let doc = Document::new("1234", "hello");
        assert_eq!(doc.id, "1234");
        assert_eq!(doc.content, "hello");
    }

    #[test]
    fn document_empty() {
        let doc = Document::empty("1234");
        assert_eq!(doc.id, "1234");
        assert!(doc.content.is_empty());
    }

    #[test]
    fn document_content_defaults_when_absent() {
        let doc: Document = serde_json::from_str(r#"{"id":"1234"}"#).unwrap();
        assert_eq!(doc.id, "1234");
        assert!(doc.content.is_empty());
    }
}
