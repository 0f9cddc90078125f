//! Durable store backed by a single JSON document.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{CacheError, KeyValueStore};

/// A `KeyValueStore` persisted as one JSON object (`{"key": "value", ...}`).
///
/// Every write rewrites the whole document through a sibling temp file and a
/// rename, so a crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories as needed.
    ///
    /// The file itself is created lazily on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CacheError::OpenError(format!("{}: {}", parent.display(), e))
            })?;
        }
        if path.is_dir() {
            return Err(CacheError::OpenError(format!(
                "{} is a directory",
                path.display()
            )));
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                CacheError::StoreError(format!(
                    "{} is not a valid store document: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(entries)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        tracing::trace!(path = %self.path.display(), keys = entries.len(), "store document written");
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<(), CacheError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| CacheError::StoreError("file store lock poisoned".to_string()))?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.load()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir()
            .join(format!("rocketshoes-cache-{}-{}", std::process::id(), nanos))
            .join(name)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let store = FileStore::open(temp_path("storage.json")).unwrap();
        assert_eq!(store.get("@RocketShoes:cart").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("storage.json");
        {
            let store = FileStore::open(&path).unwrap();
            store.set("@RocketShoes:cart", r#"[{"id":1,"amount":2}]"#).unwrap();
            store.set("other", "x").unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("@RocketShoes:cart").unwrap().as_deref(),
            Some(r#"[{"id":1,"amount":2}]"#)
        );
        assert_eq!(reopened.keys().unwrap(), vec!["@RocketShoes:cart", "other"]);
    }

    #[test]
    fn test_delete_keeps_other_keys() {
        let store = FileStore::open(temp_path("storage.json")).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.delete("a").unwrap();

        assert!(!store.exists("a").unwrap());
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_document_is_store_error() {
        let path = temp_path("storage.json");
        let store = FileStore::open(&path).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = store.get("a").unwrap_err();
        assert!(matches!(err, CacheError::StoreError(_)));
    }

    #[test]
    fn test_open_directory_fails() {
        let path = temp_path("dir");
        fs::create_dir_all(&path).unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(CacheError::OpenError(_))
        ));
    }
}
