//! Saved-usernames store
//!
//! Persists the small list of usernames the user has saved, as JSON under
//! `~/.leetlens/saved.json`. Reads take a shared lock and writes go through
//! a temp file under an exclusive lock so concurrent invocations cannot
//! corrupt the list. A corrupt store degrades to the empty list with a
//! warning.

use crate::types::{LeetlensError, Result};
use directories::BaseDirs;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Most recently added usernames kept, oldest dropped first
const MAX_SAVED: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
struct SavedProfiles {
    updated_at: i64,
    usernames: Vec<String>,
}

pub struct SavedStore {
    store_path: PathBuf,
}

impl SavedStore {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| LeetlensError::Store("Cannot determine home directory".into()))?;
        let store_path = base_dirs.home_dir().join(".leetlens").join("saved.json");
        Ok(Self { store_path })
    }

    /// Custom store path constructor (for testing)
    pub fn with_store_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Saved usernames, most recently added first. Missing or corrupt store
    /// yields the empty list.
    pub fn list(&self) -> Vec<String> {
        if !self.store_path.exists() {
            return Vec::new();
        }

        let file = match File::open(&self.store_path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("[leetlens] Warning: failed to open saved store: {}", e);
                return Vec::new();
            }
        };

        if let Err(e) = file.lock_shared() {
            eprintln!("[leetlens] Warning: failed to lock saved store: {}", e);
            return Vec::new();
        }

        let mut content = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read = reader.read_to_string(&mut content);
        let _ = file.unlock();

        if read.is_err() {
            return Vec::new();
        }

        match serde_json::from_str::<SavedProfiles>(&content) {
            Ok(store) => store.usernames,
            Err(e) => {
                eprintln!("[leetlens] Warning: corrupt saved store, ignoring: {}", e);
                Vec::new()
            }
        }
    }

    /// Add a username to the front of the list. Re-adding an existing name
    /// moves it to the front; the list is capped at [`MAX_SAVED`].
    pub fn add(&self, username: &str) -> Result<()> {
        let mut usernames = self.list();
        usernames.retain(|u| u != username);
        usernames.insert(0, username.to_string());
        usernames.truncate(MAX_SAVED);
        self.save(usernames)
    }

    /// Remove a username. Removing a name that is not saved is a no-op.
    pub fn remove(&self, username: &str) -> Result<()> {
        let mut usernames = self.list();
        usernames.retain(|u| u != username);
        self.save(usernames)
    }

    /// Atomic write (temp file + rename) with an exclusive lock.
    fn save(&self, usernames: Vec<String>) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let store = SavedProfiles {
            updated_at: chrono::Utc::now().timestamp(),
            usernames,
        };
        let content = serde_json::to_string_pretty(&store)
            .map_err(|e| LeetlensError::Store(format!("Serialization failed: {}", e)))?;

        let temp_path = self.store_path.with_extension("json.tmp");
        {
            let mut file = File::create(&temp_path)
                .map_err(|e| LeetlensError::Store(format!("Failed to create temp file: {}", e)))?;
            file.write_all(content.as_bytes())
                .map_err(|e| LeetlensError::Store(format!("Failed to write temp file: {}", e)))?;
            file.sync_all()
                .map_err(|e| LeetlensError::Store(format!("Failed to sync temp file: {}", e)))?;
        }

        let target = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.store_path)?;
        target
            .lock_exclusive()
            .map_err(|e| LeetlensError::Store(format!("Failed to acquire write lock: {}", e)))?;

        let renamed = fs::rename(&temp_path, &self.store_path);
        let _ = target.unlock();
        renamed.map_err(|e| LeetlensError::Store(format!("Failed to rename temp file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_store(dir: &TempDir) -> SavedStore {
        SavedStore::with_store_path(dir.path().join("saved.json"))
    }

    #[test]
    fn test_list_missing_store_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(make_store(&dir).list().is_empty());
    }

    #[test]
    fn test_add_and_list() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        store.add("alice").unwrap();
        store.add("bob").unwrap();

        assert_eq!(store.list(), vec!["bob".to_string(), "alice".to_string()]);
    }

    #[test]
    fn test_re_add_moves_to_front() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        store.add("alice").unwrap();
        store.add("bob").unwrap();
        store.add("alice").unwrap();

        assert_eq!(store.list(), vec!["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        store.add("alice").unwrap();
        store.add("bob").unwrap();
        store.remove("alice").unwrap();

        assert_eq!(store.list(), vec!["bob".to_string()]);

        // Removing an unknown name is a no-op
        store.remove("carol").unwrap();
        assert_eq!(store.list(), vec!["bob".to_string()]);
    }

    #[test]
    fn test_cap_at_max_saved() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        for i in 0..15 {
            store.add(&format!("user{}", i)).unwrap();
        }

        let list = store.list();
        assert_eq!(list.len(), MAX_SAVED);
        assert_eq!(list[0], "user14");
        // Oldest entries dropped
        assert!(!list.contains(&"user0".to_string()));
    }

    #[test]
    fn test_corrupt_store_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        fs::write(dir.path().join("saved.json"), "{not json").unwrap();

        assert!(store.list().is_empty());

        // And a subsequent add overwrites it cleanly
        store.add("alice").unwrap();
        assert_eq!(store.list(), vec!["alice".to_string()]);
    }
}
