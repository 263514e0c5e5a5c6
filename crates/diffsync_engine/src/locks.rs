//! Keyed lock tables for per-pair serialization.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// A table of lazily created mutexes keyed by `K`.
///
/// Callers lock the `Arc` returned by [`LockTable::lock_for`] for the
/// duration of one engine operation; operations with different keys
/// never contend.
#[derive(Debug)]
pub(crate) struct LockTable<K> {
    locks: Mutex<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K: Eq + Hash + Clone> LockTable<K> {
    pub(crate) fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the mutex for `key`, creating it on first use.
    pub(crate) fn lock_for(&self, key: &K) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.lock().entry(key.clone()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_returns_same_mutex() {
        let table: LockTable<String> = LockTable::new();
        let a = table.lock_for(&"k".to_owned());
        let b = table.lock_for(&"k".to_owned());
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_keys_do_not_contend() {
        let table: LockTable<String> = LockTable::new();
        let a = table.lock_for(&"a".to_owned());
        let b = table.lock_for(&"b".to_owned());

        let _held = a.lock();
        // Locking a different key must not block.
        assert!(b.try_lock().is_some());
    }
}
