//! Persistence for the bearer token.
//!
//! The token outlives the page: it is written on login, read once when the
//! session scope starts, and removed on logout or failed validation.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` is the only backing store. SSR paths see an empty store so
//! server rendering never issues an authenticated request.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (SSR, or storage disabled by the browser).
    #[error("token storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota, private mode).
    #[error("token write failed: {0}")]
    Write(String),

    /// The backend refused the delete; the token survives a reload.
    #[error("token removal failed: {0}")]
    Remove(String),
}

/// Read/write access to the persisted bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the token could not be written.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the token. Removing an absent token succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if a stored token could not be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Token store backed by `window.localStorage`, scoped to the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(&self.key, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(&self.key)
                .map_err(|e| StorageError::Remove(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// In-process token store. Used for SSR-free rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RefCell::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
