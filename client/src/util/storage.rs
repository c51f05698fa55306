//! Browser `localStorage` backend for the core storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` is a zero-sized handle that looks storage up on every
//! call, so stores holding it stay `Send + Sync` and fit in Leptos
//! `StoredValue`s. Outside the `csr` build it behaves as an empty,
//! write-accepting store so pages render natively in tests.

use clubhub::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn rejected(key: &str, err: &impl std::fmt::Debug) -> StorageError {
    StorageError::WriteRejected { key: key.to_owned(), reason: format!("{err:?}") }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| rejected(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| rejected(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
