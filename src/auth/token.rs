//! Bearer token persistence.

use std::sync::Arc;

use crate::config::BearerToken;
use crate::storage::{KeyValueStore, StorageError, TOKEN_KEY};

/// Persists the single active bearer token in a [`KeyValueStore`].
///
/// Authentication is presence-based: the token is never inspected for expiry.
/// The backend answers 401 once a token stops being valid, and
/// [`HttpClient`](crate::clients::HttpClient) removes it then.
///
/// Cloning a `TokenManager` shares the same store.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use shop_admin::{BearerToken, TokenManager};
/// use shop_admin::storage::MemoryStore;
///
/// let tokens = TokenManager::new(Arc::new(MemoryStore::new()));
/// assert!(!tokens.is_authenticated().unwrap());
///
/// tokens.set(&BearerToken::new("abc").unwrap()).unwrap();
/// assert!(tokens.is_authenticated().unwrap());
///
/// tokens.remove().unwrap();
/// assert!(tokens.get().unwrap().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TokenManager {
    store: Arc<dyn KeyValueStore>,
}

impl TokenManager {
    /// Creates a token manager over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored token, if any.
    ///
    /// An empty stored value reads as no token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    pub fn get(&self) -> Result<Option<BearerToken>, StorageError> {
        Ok(self
            .store
            .get(TOKEN_KEY)?
            .and_then(|raw| BearerToken::new(raw).ok()))
    }

    /// Stores `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be written.
    pub fn set(&self, token: &BearerToken) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token.as_ref())
    }

    /// Clears the stored token. Removing an absent token succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be written.
    pub fn remove(&self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY)
    }

    /// Returns `true` iff a token is present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool, StorageError> {
        Ok(self.get()?.is_some())
    }
}
