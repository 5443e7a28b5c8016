//! # Browser localStorage backend
//!
//! [`LocalStorage`] is the [`Storage`] implementation used on the **web
//! platform**. Values live in `window.localStorage`, which survives page
//! reloads and is scoped to the page origin.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage`
//! on every operation. `web_sys::Storage` is not `Send`/`'static`-friendly to
//! cache across the component tree, and the lookup is a cheap property read.
//!
//! ## Error handling
//!
//! Browsers throw on storage access when it is disabled (private windows,
//! blocked cookies) or when the quota is exceeded. Reads degrade to `None`;
//! writes and removals surface the refusal as a [`StorageError`].

use crate::storage::{Storage, StorageError};

/// `window.localStorage`-backed Storage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::backend().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::backend().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}
