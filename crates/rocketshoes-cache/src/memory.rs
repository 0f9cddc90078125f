//! In-process store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{CacheError, KeyValueStore};

/// A `KeyValueStore` held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

fn poisoned<T>(_: T) -> CacheError {
    CacheError::StoreError("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        assert!(!store.exists("missing").unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("@RocketShoes:cart", "[]").unwrap();
        assert_eq!(store.get("@RocketShoes:cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::with_entries([("k", "old")]);
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.keys().unwrap(), vec!["k".to_string()]);
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::with_entries([("k", "v")]);
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
        // deleting again is fine
        store.delete("k").unwrap();
    }
}
