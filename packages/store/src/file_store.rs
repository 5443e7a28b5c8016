//! # Filesystem-backed storage
//!
//! [`FileStorage`] is the [`Storage`] implementation used on desktop. Each key
//! becomes one file under the base directory, so a reload (app restart) sees
//! exactly what the previous run wrote.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── auth-tokens            # JSON auth record
//! └── sidebar-collapsed      # "1" or "0"
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/acme/` |
//! | Linux | `~/.local/share/acme/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\acme\` |
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write never leaves a truncated value behind.

use std::path::PathBuf;

use crate::storage::{Storage, StorageError};

/// Filesystem-backed Storage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Storage rooted at `<data_dir>/<app>`, or `./<app>` when the platform
    /// has no data directory.
    pub fn in_data_dir(app: &str) -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app);
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
                _ => '_',
            })
            .collect();
        self.base.join(file_name)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_error = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_error)?;

        let path = self.key_path(key);
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let result = std::fs::write(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result.map_err(write_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::new(dir.path().to_path_buf());
        storage.set("sidebar-collapsed", "1").unwrap();

        // Re-open from the same directory, as a restarted app would
        let reopened = FileStorage::new(dir.path().to_path_buf());
        assert_eq!(reopened.get("sidebar-collapsed").as_deref(), Some("1"));
    }

    #[test]
    fn test_remove_and_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert!(storage.get("auth-tokens").is_none());
        storage.remove("auth-tokens").unwrap();

        storage.set("auth-tokens", "{}").unwrap();
        assert_eq!(storage.get("auth-tokens").as_deref(), Some("{}"));

        storage.remove("auth-tokens").unwrap();
        assert!(storage.get("auth-tokens").is_none());
    }

    #[test]
    fn test_keys_cannot_escape_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());

        storage.set("../outside", "x").unwrap();
        assert!(!dir.path().parent().unwrap().join("outside").exists());
        assert_eq!(storage.get("../outside").as_deref(), Some("x"));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the base directory should be
        let blocker = dir.path().join("acme");
        std::fs::write(&blocker, "").unwrap();

        let storage = FileStorage::new(blocker);
        let err = storage.set("auth-tokens", "{}").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "auth-tokens"));
    }
}
