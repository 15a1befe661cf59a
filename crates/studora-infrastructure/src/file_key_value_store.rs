//! File-backed key-value store.
//!
//! One JSON file per key under the cache directory, written atomically.
//! This is the persistent counterpart of the browser build's local storage:
//! no TTL, values survive restarts, and a value changes only on explicit
//! overwrite or removal.

use std::path::PathBuf;

use async_trait::async_trait;

use studora_core::error::{Result, StudoraError};
use studora_core::kv::KeyValueStore;

use crate::paths::StudoraPaths;
use crate::storage::AtomicFile;

/// [`KeyValueStore`] writing each key to its own file.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates a store rooted at the platform cache directory.
    pub fn open_default() -> Result<Self> {
        let root = StudoraPaths::cache_dir()?;
        Ok(Self::new(root))
    }

    fn file_for(&self, key: &str) -> AtomicFile {
        AtomicFile::new(self.root.join(format!("{}.json", sanitize_key(key))))
    }
}

/// Maps a store key to a safe file stem.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key);
        tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| StudoraError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let file = self.file_for(key);
        tokio::task::spawn_blocking(move || file.save(&value))
            .await
            .map_err(|e| StudoraError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file = self.file_for(key);
        tokio::task::spawn_blocking(move || file.remove())
            .await
            .map_err(|e| StudoraError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use studora_core::kv::KeyValueStoreExt;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[tokio::test]
    async fn test_raw_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        store.set_raw("greeting", "hello".to_string()).await.unwrap();
        assert_eq!(
            store.get_raw("greeting").await.unwrap(),
            Some("hello".to_string())
        );
    }

    #[tokio::test]
    async fn test_typed_round_trip_is_deep_equal() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        let record = Record {
            name: "test".to_string(),
            count: 42,
        };
        store.set_value("record", &record).await.unwrap();

        let loaded: Record = store.get_value("record").await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_absent_key_returns_supplied_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        let fallback = Record {
            name: "fallback".to_string(),
            count: 0,
        };
        let value = store.get_or("missing", fallback.clone()).await.unwrap();
        assert_eq!(value, fallback);
    }

    #[tokio::test]
    async fn test_corrupt_payload_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        store
            .set_raw("record", "{not valid json".to_string())
            .await
            .unwrap();

        let fallback = Record {
            name: "fallback".to_string(),
            count: 7,
        };
        let value = store.get_or("record", fallback.clone()).await.unwrap();
        assert_eq!(value, fallback);
    }

    #[tokio::test]
    async fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        store.set_raw("key", "value".to_string()).await.unwrap();
        store.remove("key").await.unwrap();
        assert!(store.get_raw("key").await.unwrap().is_none());

        // Removing an absent key is fine.
        store.remove("key").await.unwrap();
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("user_profile"), "user_profile");
        assert_eq!(sanitize_key("a/b..c"), "a_b__c");
    }
}
