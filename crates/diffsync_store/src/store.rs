//! Data store trait definition.

use crate::error::StoreResult;
use diffsync_protocol::{Document, Edit, Shadow, ShadowBackup};

/// Keyed persistence for documents, shadows, backups, and pending edits.
///
/// The sync engine owns all protocol logic; stores only hold state.
/// Every getter returns a copy that does not alias internal storage.
///
/// # Invariants
///
/// - at most one [`Document`] per id; `save_document` refuses to
///   overwrite, `update_document` refuses to create
/// - exactly one live [`Shadow`] per (document, client) pair;
///   `save_shadow` replaces any previous one
/// - the [`ShadowBackup`] held for a pair is the most recently saved
///   one, never an older checkpoint
///
/// # Implementors
///
/// - [`super::InMemoryDataStore`] - in-process maps, for tests and
///   ephemeral servers
pub trait DataStore: Send + Sync {
    /// Returns the document with the given id, if present.
    fn get_document(&self, id: &str) -> StoreResult<Option<Document>>;

    /// Stores `doc` iff no document exists for its id.
    ///
    /// Returns whether the document was stored.
    fn save_document(&self, doc: &Document) -> StoreResult<bool>;

    /// Overwrites the document iff one exists for its id; no-op
    /// otherwise.
    fn update_document(&self, doc: &Document) -> StoreResult<()>;

    /// Deletes the document iff present.
    fn remove_document(&self, id: &str) -> StoreResult<()>;

    /// Creates a shadow of `doc` for `client_id` at the given versions,
    /// replacing any previous shadow for the pair.
    ///
    /// Returns a copy of the stored shadow.
    fn save_shadow(
        &self,
        doc: &Document,
        client_id: &str,
        server_version: i64,
        client_version: i64,
    ) -> StoreResult<Shadow>;

    /// Returns the shadow for the (document, client) pair, if present.
    fn get_shadow(&self, id: &str, client_id: &str) -> StoreResult<Option<Shadow>>;

    /// Deletes the shadow for the (document, client) pair.
    fn remove_shadow(&self, id: &str, client_id: &str) -> StoreResult<()>;

    /// Stores a backup of `shadow` tagged with `version`, replacing any
    /// previous backup for the pair.
    ///
    /// Returns a copy of the stored backup.
    fn save_shadow_backup(&self, shadow: &Shadow, version: i64) -> StoreResult<ShadowBackup>;

    /// Returns the backup for the (document, client) pair, if present.
    fn get_shadow_backup(&self, id: &str, client_id: &str) -> StoreResult<Option<ShadowBackup>>;

    /// Deletes the backup for the (document, client) pair.
    fn remove_shadow_backup(&self, id: &str, client_id: &str) -> StoreResult<()>;

    /// Returns all pending edits for the (document, client) pair, in
    /// the order they were saved.
    fn get_edits(&self, id: &str, client_id: &str) -> StoreResult<Vec<Edit>>;

    /// Appends `edit` to the pending list for its document id.
    fn save_edit(&self, edit: &Edit) -> StoreResult<()>;

    /// Removes pending edits for `edit`'s document id that belong to
    /// `edit`'s client.
    fn remove_edit(&self, edit: &Edit) -> StoreResult<()>;
}
