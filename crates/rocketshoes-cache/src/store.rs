//! The raw string store abstraction.

use std::sync::Arc;

use crate::CacheError;

/// A flat string-keyed store of string values.
///
/// Implementations must be safe to share across tasks. Each call is
/// independent; callers that need read-modify-write atomicity across calls
/// must serialize access themselves.
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value for a key, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Set the raw value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}
