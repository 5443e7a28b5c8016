//! # Storage: the durable key/value contract
//!
//! Every piece of client state that must survive a reload (the auth record,
//! the sidebar preference) goes through the [`Storage`] trait. Backends:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::LocalStorage`] | Browser `window.localStorage` (WASM + `web` feature) |
//! | [`crate::FileStorage`] | One file per key under a data directory (desktop) |
//! | [`crate::MemoryStorage`] | Tests and fallback when nothing durable is available |
//!
//! ## Error handling
//!
//! Reads never fail: a value that cannot be served is `None`. Writes and
//! removals return a [`StorageError`] so callers that must keep memory and
//! disk in step can react; callers that only cache a preference log it and
//! move on.
//!
//! All methods take `&self`: backends use interior mutability so a single
//! `Rc<dyn Storage>` can be shared across the component tree.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A write or removal the backend refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove {key}: {reason}")]
    Remove { key: String, reason: String },
    #[error("failed to encode {key}: {reason}")]
    Encode { key: String, reason: String },
}

/// Synchronous string key/value store.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a JSON value stored under `key`.
///
/// A value that no longer parses (older schema, manual edits) is removed so
/// the next read starts clean.
pub fn load_json<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, "Discarding unreadable stored value: {e}");
            if let Err(e) = storage.remove(key) {
                tracing::warn!(key, "{e}");
            }
            None
        }
    }
}

/// Save `value` as JSON under `key`.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    storage.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Draft {
        title: String,
        pinned: bool,
    }

    #[test]
    fn test_json_roundtrip_through_dyn_storage() {
        let storage = MemoryStorage::new();
        let dyn_storage: &dyn Storage = &storage;

        let draft = Draft {
            title: "Quarterly plan".to_string(),
            pinned: true,
        };
        save_json(dyn_storage, "draft", &draft).unwrap();

        let loaded: Option<Draft> = load_json(dyn_storage, "draft");
        assert_eq!(loaded, Some(draft));
    }

    #[test]
    fn test_unreadable_value_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set("draft", "{not json").unwrap();

        let loaded: Option<Draft> = load_json(&storage, "draft");
        assert!(loaded.is_none());
        assert!(storage.get("draft").is_none());
    }

    #[test]
    fn test_missing_key_loads_nothing() {
        let storage = MemoryStorage::new();
        let loaded: Option<Draft> = load_json(&storage, "absent");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_unreadable_value_survives_failed_cleanup() {
        struct ReadOnly;
        impl Storage for ReadOnly {
            fn get(&self, _key: &str) -> Option<String> {
                Some("{not json".to_string())
            }
            fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Write { key: key.to_string(), reason: "read-only".to_string() })
            }
            fn remove(&self, key: &str) -> Result<(), StorageError> {
                Err(StorageError::Remove { key: key.to_string(), reason: "read-only".to_string() })
            }
        }

        let loaded: Option<Draft> = load_json(&ReadOnly, "draft");
        assert!(loaded.is_none());
        assert!(save_json(&ReadOnly, "draft", &Draft { title: "x".to_string(), pinned: false }).is_err());
    }
}
