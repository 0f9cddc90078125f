//! String key-value persistence for RocketShoes.
//!
//! Mirrors the browser's local storage model: a flat namespace of string keys,
//! each holding one string value. Two backends ship with the crate:
//!
//! - [`MemoryStore`]: process-local, used in tests and ephemeral sessions
//! - [`FileStore`]: durable, a single JSON document on disk
//!
//! [`Cache`] layers automatic JSON serialization on top of any backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketshoes_cache::{cache_key, Cache, FileStore};
//!
//! let cache = Cache::new(FileStore::open(".rocketshoes/storage.json")?);
//! let key = cache_key!("@RocketShoes", "cart");
//!
//! // Store a value
//! cache.set(&key, &entries)?;
//!
//! // Retrieve a value
//! let entries: Option<Vec<Entry>> = cache.get(&key)?;
//!
//! // Delete a value
//! cache.delete(&key)?;
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
