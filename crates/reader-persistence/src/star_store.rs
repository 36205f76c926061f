//! Starred-set persistence.

use reader_model::{ArticleId, StarredSet};

use crate::error::{PersistenceError, Result};
use crate::store::KeyValueStore;

/// Default key for the starred set.
pub const STORAGE_KEY: &str = "starredArticleIds";

/// Loads and saves the starred set through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct StarStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StarStore<S> {
    /// Use `store` with the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Use `store` with a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the persisted set.
    ///
    /// A missing key, unreadable store, or undecodable value all yield an
    /// empty set. Failures are logged, never returned.
    pub fn load(&self) -> StarredSet {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No starred set stored yet");
                return StarredSet::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Failed to read starred set");
                return StarredSet::new();
            }
        };

        match serde_json::from_str::<StarredSet>(&raw) {
            Ok(set) => {
                tracing::info!(count = set.len(), "Loaded starred set");
                set
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Discarding malformed starred set");
                StarredSet::new()
            }
        }
    }

    /// Persist `set`, replacing whatever was stored.
    pub fn save(&mut self, set: &StarredSet) -> Result<()> {
        let encoded = serde_json::to_string(set)
            .map_err(|source| PersistenceError::Serialization { source })?;
        self.store.set(&self.key, &encoded)?;
        tracing::debug!(count = set.len(), "Saved starred set");
        Ok(())
    }

    /// Return `current` with `id` flipped. Does not persist.
    pub fn toggle(current: &StarredSet, id: ArticleId) -> StarredSet {
        current.toggled(id)
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn ids(set: &StarredSet) -> Vec<i64> {
        set.iter().map(ArticleId::get).collect()
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = StarStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"a\":1}", "5", "null", "[1, \"two\"]", "[1.5]"] {
            let store = StarStore::new(MemoryStore::with_entry(STORAGE_KEY, raw));
            assert!(store.load().is_empty(), "expected empty set for {raw:?}");
        }
    }

    #[test]
    fn test_load_reads_unordered_array() {
        let store = StarStore::new(MemoryStore::with_entry(STORAGE_KEY, "[4, 2, 4]"));
        assert_eq!(ids(&store.load()), vec![2, 4]);
    }

    #[test]
    fn test_save_writes_json_array() {
        let mut store = StarStore::new(MemoryStore::new());
        let set: StarredSet = [ArticleId(3), ArticleId(1)].into_iter().collect();
        store.save(&set).unwrap();
        assert_eq!(store.store().raw(STORAGE_KEY), Some("[1,3]"));
    }

    #[test]
    fn test_custom_key() {
        let mut store = StarStore::with_key(MemoryStore::new(), "favs");
        store.save(&StarredSet::new().toggled(ArticleId(9))).unwrap();
        assert_eq!(store.key(), "favs");
        assert_eq!(store.store().raw("favs"), Some("[9]"));
        assert_eq!(store.store().raw(STORAGE_KEY), None);
    }

    #[test]
    fn test_toggle_is_pure() {
        let store = StarStore::new(MemoryStore::new());
        let current = StarredSet::new();
        let next = StarStore::<MemoryStore>::toggle(&current, ArticleId(1));
        assert!(next.contains(ArticleId(1)));
        assert!(current.is_empty());
        assert_eq!(store.store().raw(STORAGE_KEY), None);
    }
}
