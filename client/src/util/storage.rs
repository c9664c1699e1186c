//! Durable key/value storage backing the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists tokens and the user record through
//! [`SessionStorage`] so it never touches `web-sys` directly. Hydrate builds
//! use browser `localStorage`; server rendering and tests use
//! [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// A write the backing store refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, or storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The store rejected the write, e.g. quota exceeded or private mode.
    #[error("storage write rejected for key {0}")]
    Rejected(String),
}

/// Synchronous string storage. Removal is best effort; writes report
/// failure so callers can keep storage and memory in agreement.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value was not stored.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str);
}

/// In-process storage used off the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build storage pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Browser `localStorage`, looked up on every call so the handle stays `Send`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected(key.to_owned()))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::local() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Storage used by the running app.
#[cfg(feature = "hydrate")]
pub type AppStorage = BrowserStorage;
#[cfg(not(feature = "hydrate"))]
pub type AppStorage = MemoryStorage;
