//! In-memory data store.

use crate::error::StoreResult;
use crate::store::DataStore;
use diffsync_protocol::{Document, Edit, Shadow, ShadowBackup};
use parking_lot::RwLock;
use std::collections::HashMap;

type PairKey = (String, String);

fn pair_key(id: &str, client_id: &str) -> PairKey {
    (id.to_owned(), client_id.to_owned())
}

/// An in-memory [`DataStore`].
///
/// Suitable for unit tests, integration tests, and ephemeral sync
/// servers that do not need durability.
///
/// # Thread Safety
///
/// All maps are behind `parking_lot::RwLock`; the store can be shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use diffsync_store::{DataStore, InMemoryDataStore};
/// use diffsync_protocol::Document;
///
/// let store = InMemoryDataStore::new();
/// let doc = Document::new("1234", "hello");
/// assert!(store.save_document(&doc).unwrap());
/// assert!(!store.save_document(&doc).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDataStore {
    docs: RwLock<HashMap<String, Document>>,
    shadows: RwLock<HashMap<PairKey, Shadow>>,
    backups: RwLock<HashMap<PairKey, ShadowBackup>>,
    edits: RwLock<HashMap<String, Vec<Edit>>>,
}

impl InMemoryDataStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryDataStore {
    fn get_document(&self, id: &str) -> StoreResult<Option<Document>> {
        Ok(self.docs.read().get(id).cloned())
    }

    fn save_document(&self, doc: &Document) -> StoreResult<bool> {
        let mut docs = self.docs.write();
        if docs.contains_key(&doc.id) {
            return Ok(false);
        }
        docs.insert(doc.id.clone(), doc.clone());
        Ok(true)
    }

    fn update_document(&self, doc: &Document) -> StoreResult<()> {
        let mut docs = self.docs.write();
        if docs.contains_key(&doc.id) {
            docs.insert(doc.id.clone(), doc.clone());
        }
        Ok(())
    }

    fn remove_document(&self, id: &str) -> StoreResult<()> {
        self.docs.write().remove(id);
        Ok(())
    }

    fn save_shadow(
        &self,
        doc: &Document,
        client_id: &str,
        server_version: i64,
        client_version: i64,
    ) -> StoreResult<Shadow> {
        let shadow = Shadow::of(doc, client_id, server_version, client_version);
        self.shadows
            .write()
            .insert(pair_key(&doc.id, client_id), shadow.clone());
        Ok(shadow)
    }

    fn get_shadow(&self, id: &str, client_id: &str) -> StoreResult<Option<Shadow>> {
        Ok(self.shadows.read().get(&pair_key(id, client_id)).cloned())
    }

    fn remove_shadow(&self, id: &str, client_id: &str) -> StoreResult<()> {
        self.shadows.write().remove(&pair_key(id, client_id));
        Ok(())
    }

    fn save_shadow_backup(&self, shadow: &Shadow, version: i64) -> StoreResult<ShadowBackup> {
        let backup = ShadowBackup::of(shadow, version);
        self.backups
            .write()
            .insert(pair_key(&shadow.id, &shadow.client_id), backup.clone());
        Ok(backup)
    }

    fn get_shadow_backup(&self, id: &str, client_id: &str) -> StoreResult<Option<ShadowBackup>> {
        Ok(self.backups.read().get(&pair_key(id, client_id)).cloned())
    }

    fn remove_shadow_backup(&self, id: &str, client_id: &str) -> StoreResult<()> {
        self.backups.write().remove(&pair_key(id, client_id));
        Ok(())
    }

    fn get_edits(&self, id: &str, client_id: &str) -> StoreResult<Vec<Edit>> {
        Ok(self
            .edits
            .read()
            .get(id)
            .map(|pending| {
                pending
                    .iter()
                    .filter(|edit| edit.client_id == client_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn save_edit(&self, edit: &Edit) -> StoreResult<()> {
        self.edits
            .write()
            .entry(edit.id.clone())
            .or_default()
            .push(edit.clone());
        Ok(())
    }

    fn remove_edit(&self, edit: &Edit) -> StoreResult<()> {
        if let Some(pending) = self.edits.write().get_mut(&edit.id) {
            pending.retain(|e| e.client_id != edit.client_id);
        }
        Ok(())
    }
}
