//! Durable key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session and theme stores persist through [`KeyValueStore`]. The browser
//! build backs it with `localStorage`; tests and native callers use
//! [`MemoryStore`], whose clones share one map so a second store instance
//! built on a clone behaves like a page reload.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: missing or corrupt values surface as `None`. Writes
//! return [`StorageError`] so callers can keep persisted and in-memory state
//! in step.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Errors produced by storage writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (e.g. no `window`, private mode).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the write (quota, security policy).
    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// A value could not be serialized before writing.
    #[error("serialize failed for key {key}: {reason}")]
    Serialize { key: String, reason: String },
}

/// Origin-scoped string key-value storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`, or `None` if absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a JSON value for `key`.
///
/// Corrupt JSON is logged and treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%key, error = %e, "discarding malformed stored value");
            None
        }
    }
}

/// Save a JSON value for `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or the backend rejects the write.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize { key: key.to_owned(), reason: e.to_string() })?;
    store.set_item(key, &raw)
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

/// In-memory storage. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent write, simulating an exhausted quota.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::WriteRejected { key: key.to_owned(), reason: "read-only".to_owned() });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
