//! Shadow documents and their backups.

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// The server's belief about one client's copy of a document.
///
/// A `Shadow` records the text the server thinks the client last saw,
/// together with the round counters the next version check is performed
/// against.
///
/// # Fields
///
/// - `server_version`: the server's outbound round counter for this client
/// - `client_version`: the next client round the server will accept;
///   an inbound [`crate::Edit`] with a smaller `client_version` has
///   already been applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Document identifier.
    pub id: String,
    /// The client this shadow belongs to.
    pub client_id: String,
    /// Server round counter.
    pub server_version: i64,
    /// Next expected client round.
    pub client_version: i64,
    /// The server's best guess of the client's copy.
    pub content: String,
}

impl Shadow {
    /// Creates a shadow of `doc` for `client_id` at the given versions.
    pub fn of(doc: &Document, client_id: impl Into<String>, server_version: i64, client_version: i64) -> Self {
        Self {
            id: doc.id.clone(),
            client_id: client_id.into(),
            server_version,
            client_version,
            content: doc.content.clone(),
        }
    }
}

/// A checkpoint of a prior [`Shadow`], used to recover from a lost
/// server-to-client round trip.
///
/// The backup held for a (document, client) pair is always the most
/// recently taken one: it is the last state the server can prove the
/// client actually had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowBackup {
    /// The `server_version` the shadow had when the backup was taken.
    pub version: i64,
    /// A value copy of the shadow at that moment.
    pub shadow: Shadow,
}

impl ShadowBackup {
    /// Creates a backup of `shadow` tagged with `version`.
    pub fn of(shadow: &Shadow, version: i64) -> Self {
        Self {
            version,
            shadow: shadow.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_of_document() {
        let doc = Document::new("1234", "hello");
        let shadow = Shadow::of(&doc, "client-1", 0, 0);

        assert_eq!(shadow.id, "1234");
        assert_eq!(shadow.client_id, "client-1");
        assert_eq!(shadow.server_version, 0);
        assert_eq!(shadow.client_version, 0);
        assert_eq!(shadow.content, "hello");
    }

    #[test]
    fn backup_is_value_copy() {
        let doc = Document::new("1234", "hello");
        let mut shadow = Shadow::of(&doc, "client-1", 0, 0);
        let backup = ShadowBackup::of(&shadow, shadow.server_version);

        shadow.server_version = 1;
        shadow.content = "changed".into();

        assert_eq!(backup.version, 0);
        assert_eq!(backup.shadow.server_version, 0);
        assert_eq!(backup.shadow.content, "hello");
    }

    #[test]
    fn shadow_json_field_names() {
        let doc = Document::new("1234", "hello");
        let shadow = Shadow::of(&doc, "client-1", 2, 3);
        let json = serde_json::to_value(&shadow).unwrap();

        assert_eq!(json["clientId"], "client-1");
        assert_eq!(json["serverVersion"], 2);
        assert_eq!(json["clientVersion"], 3);
    }
}
