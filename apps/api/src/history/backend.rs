//! Storage backends for the history blob.
//!
//! The store only ever needs two operations on a string keyed value, so the
//! port is deliberately that small. `FsStore` is the production backend;
//! `MemoryStore` backs ephemeral mode and the test suite.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value string storage for whole-blob reads and writes.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-per-key storage under a data directory.
///
/// Writes go to a temp file first and are renamed into place, so a write
/// that dies partway can never leave a truncated blob behind.
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageBackend for FsStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, self.path_for(key)).await?;
        Ok(())
    }
}

/// In-memory backend. State lives for the life of the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.read("missing").await.unwrap().is_none());

        store.write("k", "[1,2,3]").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("[1,2,3]"));

        store.write("k", "[]").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_fs_store_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let writer = FsStore::new(dir.path());
        writer.write("history", r#"[{"id":"a"}]"#).await.unwrap();

        let reader = FsStore::new(dir.path());
        assert_eq!(
            reader.read("history").await.unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }

    #[tokio::test]
    async fn test_fs_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        assert!(store.read("history").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fs_store_leaves_no_tmp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        store.write("history", "[]").await.unwrap();
        assert!(!dir.path().join("history.json.tmp").exists());
        assert!(dir.path().join("history.json").exists());
    }
}
