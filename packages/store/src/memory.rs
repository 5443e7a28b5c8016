use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{Storage, StorageError};

/// In-memory Storage for testing and as a fallback when nothing durable exists.
///
/// Clones share the same entries, which lets a test keep a handle on the
/// storage it gave to a session store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("theme").is_none());

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));

        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").as_deref(), Some("light"));

        storage.remove("theme").unwrap();
        assert!(storage.get("theme").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));

        other.remove("k").unwrap();
        assert!(storage.get("k").is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("nothing-here").unwrap();
        assert!(storage.get("nothing-here").is_none());
    }
}
