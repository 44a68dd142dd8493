//! Persistent key-value storage for client-side state.
//!
//! The token and the cart each live in one named slot of a [`KeyValueStore`].
//! Stores are injected into [`TokenManager`](crate::TokenManager) and
//! [`CartManager`](crate::CartManager) so tests can swap in a [`MemoryStore`]
//! while a desktop or CLI front end persists to disk with a [`FileStore`].
//!
//! # Concurrency
//!
//! Both backends lock internally and are `Send + Sync`. Writers sharing one
//! [`FileStore`] file from several processes get last-writer-wins semantics.
//!
//! # Example
//!
//! ```rust
//! use shop_admin::storage::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("access_token", "abc").unwrap();
//! assert_eq!(store.get("access_token").unwrap().as_deref(), Some("abc"));
//!
//! store.remove("access_token").unwrap();
//! assert!(store.get("access_token").unwrap().is_none());
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt::Debug;
use std::path::PathBuf;

use thiserror::Error;

/// Storage slot holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Storage slot holding the JSON-encoded cart.
pub const CART_KEY: &str = "cart";

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not contain a JSON object of string values.
    #[error("Storage file {path} is corrupt: {source}")]
    Corrupt {
        /// The file being read.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("Failed to encode value for storage: {0}")]
    Encode(#[from] serde_json::Error),

    /// Another thread panicked while holding the store lock.
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// A synchronous string key-value store.
///
/// Implementations must treat [`remove`](Self::remove) of a missing key as
/// success.
pub trait KeyValueStore: Debug + Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
