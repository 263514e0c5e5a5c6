//! The server-side reconciliation state machine.

use crate::error::{SyncError, SyncResult};
use crate::locks::LockTable;
use diffsync_diff::Differ;
use diffsync_protocol::{Document, Edit, PatchMessage, Shadow, ShadowBackup};
use diffsync_store::DataStore;
use tracing::debug;

/// Server version a shadow starts at when its client attaches to an
/// already existing document.
const SEED_SERVER_VERSION: i64 = 1;

/// Sentinel client version marking "no client round accepted yet".
const SEED_CLIENT_VERSION: i64 = -1;

fn pair_key(id: &str, client_id: &str) -> (String, String) {
    (id.to_owned(), client_id.to_owned())
}

/// The differential synchronization engine.
///
/// `ServerSyncEngine` tracks, per (document, client) pair, the
/// divergence between the server's authoritative document, the shadow
/// of what the server believes the client last saw, and a backup
/// checkpoint used to repair lost round trips. It owns no storage and
/// no diff algorithm; both are supplied as collaborators.
///
/// # Concurrency
///
/// Every operation serializes on its (document, client) pair, and
/// document mutation additionally serializes on the document id, so
/// clients of the same document can patch concurrently without
/// interleaving read-modify-write steps. Operations on different pairs
/// never block each other.
///
/// # Example
///
/// ```rust
/// use diffsync_diff::TextDiffer;
/// use diffsync_engine::ServerSyncEngine;
/// use diffsync_protocol::Document;
/// use diffsync_store::InMemoryDataStore;
///
/// let engine = ServerSyncEngine::new(TextDiffer::new(), InMemoryDataStore::new());
/// let doc = Document::new("1234", "A long time ago");
/// let message = engine.add_document(&doc, "client-1").unwrap();
/// assert_eq!(message.edits.len(), 1);
/// ```
pub struct ServerSyncEngine<D, S> {
    differ: D,
    store: S,
    pair_locks: LockTable<(String, String)>,
    doc_locks: LockTable<String>,
}

impl<D: Differ, S: DataStore> ServerSyncEngine<D, S> {
    /// Creates a new engine over the given collaborators.
    pub fn new(differ: D, store: S) -> Self {
        Self {
            differ,
            store,
            pair_locks: LockTable::new(),
            doc_locks: LockTable::new(),
        }
    }

    /// Returns the underlying store.
    ///
    /// Exposed for observability and tests; all protocol state changes
    /// should go through the engine.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Subscribes `client_id` to a document, seeding server state as
    /// needed.
    ///
    /// If no document exists for `doc.id` it is created with the given
    /// content. If one already exists the caller-supplied content is
    /// ignored; the server copy is authoritative and the client attaches
    /// to it. A missing shadow is created from the server document
    /// together with its first backup.
    ///
    /// The returned message carries one edit describing the full current
    /// document as the client's baseline, or no edit when the document
    /// is empty.
    ///
    /// Calling this again for the same pair is an idempotent attach: the
    /// existing shadow is kept.
    pub fn add_document(&self, doc: &Document, client_id: &str) -> SyncResult<PatchMessage> {
        let pair = self.pair_locks.lock_for(&pair_key(&doc.id, client_id));
        let _pair_guard = pair.lock();
        let doc_lock = self.doc_locks.lock_for(&doc.id);
        let _doc_guard = doc_lock.lock();

        let created = self.store.save_document(doc)?;
        let server_doc = if created {
            debug!(id = %doc.id, "seeded new document");
            doc.clone()
        } else {
            self.store
                .get_document(&doc.id)?
                .ok_or_else(|| SyncError::DocumentNotFound(doc.id.clone()))?
        };

        let shadow = match self.store.get_shadow(&server_doc.id, client_id)? {
            Some(shadow) => shadow,
            None => {
                let (server_version, client_version) = if created {
                    (0, 0)
                } else {
                    (SEED_SERVER_VERSION, SEED_CLIENT_VERSION)
                };
                let shadow = self.store.save_shadow(
                    &server_doc,
                    client_id,
                    server_version,
                    client_version,
                )?;
                self.store
                    .save_shadow_backup(&shadow, shadow.server_version)?;
                shadow
            }
        };

        let diffs = self.differ.diff(&shadow.content, &server_doc.content);
        let mut edits = Vec::new();
        if !diffs.is_empty() {
            edits.push(Edit::against(&shadow, diffs));
        }

        Ok(PatchMessage::new(server_doc.id, client_id, edits))
    }

    /// Computes the server's outstanding change for `client_id`.
    ///
    /// Diffs from the client's shadow to the live document. When the
    /// document has changed, the shadow is advanced to the new content
    /// with an incremented server version, the backup is refreshed, and
    /// the returned edit is tagged with the pre-advance version pair so
    /// the client can match it against its own state. An unchanged
    /// document leaves the versions untouched and yields a single
    /// `UNCHANGED` re-confirmation when the content is non-empty.
    ///
    /// The produced edit is queued as pending until a subsequent patch
    /// from this client acknowledges the round.
    pub fn diff(&self, id: &str, client_id: &str) -> SyncResult<Edit> {
        let pair = self.pair_locks.lock_for(&pair_key(id, client_id));
        let _pair_guard = pair.lock();
        let doc_lock = self.doc_locks.lock_for(&id.to_owned());
        let _doc_guard = doc_lock.lock();

        let doc = self
            .store
            .get_document(id)?
            .ok_or_else(|| SyncError::DocumentNotFound(id.to_owned()))?;
        let shadow = self
            .store
            .get_shadow(id, client_id)?
            .ok_or_else(|| SyncError::ShadowNotFound {
                id: id.to_owned(),
                client_id: client_id.to_owned(),
            })?;

        let edit = self.differ.client_diff(&doc, &shadow);
        if !edit.diffs.is_empty() {
            self.store.save_edit(&edit)?;
        }

        if !edit.is_unchanged() {
            let advanced =
                self.store
                    .save_shadow(&doc, client_id, shadow.server_version + 1, shadow.client_version)?;
            self.store
                .save_shadow_backup(&advanced, advanced.server_version)?;
            debug!(
                id,
                client_id,
                server_version = advanced.server_version,
                "advanced shadow after outbound diff"
            );
        }

        Ok(edit)
    }

    /// Reconciles a client's inbound edits.
    ///
    /// Each edit is version-checked against the pair's shadow, in order:
    ///
    /// - an edit for a client round that was already accepted is a
    ///   duplicate and is silently discarded
    /// - a matching server version applies the edit to the document and
    ///   advances the shadow and backup
    /// - a server version matching the *backup* instead means a
    ///   server-to-client round trip was lost; the shadow is rolled back
    ///   to the backup and the edit applied against it
    /// - anything else is stale and silently discarded
    ///
    /// Applying an edit clears this client's pending outbound edits: the
    /// client's message proves it received them.
    pub fn patch(&self, message: &PatchMessage) -> SyncResult<()> {
        let pair = self
            .pair_locks
            .lock_for(&pair_key(&message.id, &message.client_id));
        let _pair_guard = pair.lock();

        for edit in &message.edits {
            let shadow = self
                .store
                .get_shadow(&message.id, &message.client_id)?
                .ok_or_else(|| SyncError::ShadowNotFound {
                    id: message.id.clone(),
                    client_id: message.client_id.clone(),
                })?;

            if edit.client_version < shadow.client_version {
                debug!(
                    id = %message.id,
                    client_id = %message.client_id,
                    client_version = edit.client_version,
                    expected = shadow.client_version,
                    "discarding already-applied edit"
                );
                continue;
            }

            if edit.server_version == shadow.server_version {
                self.apply_edit(edit, &shadow)?;
                continue;
            }

            match self.store.get_shadow_backup(&message.id, &message.client_id)? {
                Some(backup) if backup.version == edit.server_version => {
                    debug!(
                        id = %message.id,
                        client_id = %message.client_id,
                        version = backup.version,
                        "restoring shadow from backup"
                    );
                    let restored = self.restore_shadow(&backup)?;
                    self.apply_edit(edit, &restored)?;
                }
                _ => {
                    debug!(
                        id = %message.id,
                        client_id = %message.client_id,
                        edit_server_version = edit.server_version,
                        shadow_server_version = shadow.server_version,
                        "discarding stale edit"
                    );
                }
            }
        }

        Ok(())
    }

    /// Returns the document with the given id, if present.
    pub fn get_document(&self, id: &str) -> SyncResult<Option<Document>> {
        Ok(self.store.get_document(id)?)
    }

    /// Returns the shadow for the (document, client) pair, if present.
    pub fn get_shadow(&self, id: &str, client_id: &str) -> SyncResult<Option<Shadow>> {
        Ok(self.store.get_shadow(id, client_id)?)
    }

    /// Returns the shadow backup for the (document, client) pair, if
    /// present.
    pub fn get_shadow_backup(&self, id: &str, client_id: &str) -> SyncResult<Option<ShadowBackup>> {
        Ok(self.store.get_shadow_backup(id, client_id)?)
    }

    /// Rolls the live shadow back to `backup`'s checkpoint.
    fn restore_shadow(&self, backup: &ShadowBackup) -> SyncResult<Shadow> {
        let basis = Document::new(
            backup.shadow.id.as_str(),
            backup.shadow.content.as_str(),
        );
        Ok(self.store.save_shadow(
            &basis,
            &backup.shadow.client_id,
            backup.shadow.server_version,
            backup.shadow.client_version,
        )?)
    }

    /// Applies `edit` to the live document using `shadow` as the basis,
    /// then advances shadow and backup and acknowledges pending edits.
    fn apply_edit(&self, edit: &Edit, shadow: &Shadow) -> SyncResult<()> {
        let doc_lock = self.doc_locks.lock_for(&shadow.id);
        let _doc_guard = doc_lock.lock();

        let doc = self
            .store
            .get_document(&shadow.id)?
            .ok_or_else(|| SyncError::DocumentNotFound(shadow.id.clone()))?;
        let patched = self.differ.patch_document(edit, &doc)?;
        self.store.update_document(&patched)?;

        let advanced = self.store.save_shadow(
            &patched,
            &shadow.client_id,
            shadow.server_version,
            edit.client_version + 1,
        )?;
        self.store
            .save_shadow_backup(&advanced, advanced.server_version)?;
        self.store.remove_edit(edit)?;

        debug!(
            id = %shadow.id,
            client_id = %shadow.client_id,
            client_version = edit.client_version,
            "applied client edit"
        );
        Ok(())
    }
}
