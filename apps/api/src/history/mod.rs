//! Analysis history — the ordered, newest-first sequence of past results.
//!
//! The whole history is one serialized blob under a fixed key; every
//! operation is a full read-modify-write. A single writer is assumed (one
//! upload in flight at a time, enforced upstream), so there is no
//! versioning or conflict detection.

pub mod backend;
pub mod handlers;

use std::sync::Arc;

use tracing::warn;

use crate::history::backend::{StorageBackend, StorageError};
use crate::models::analysis::AnalysisRecord;

const HISTORY_KEY: &str = "resume_analyses";

#[derive(Clone)]
pub struct HistoryStore {
    backend: Arc<dyn StorageBackend>,
}

impl HistoryStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Returns the stored sequence, newest first.
    ///
    /// A read failure or an unparseable blob yields an empty history, with
    /// a warning rather than an error back to the caller. The next append
    /// will overwrite whatever was there.
    pub async fn load(&self) -> Vec<AnalysisRecord> {
        let raw = match self.backend.read(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read history, treating as empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("history blob failed to parse, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Prepends `record` so the newest analysis is always first.
    pub async fn append(&self, record: AnalysisRecord) -> Result<(), StorageError> {
        let mut records = self.load().await;
        records.insert(0, record);
        self.persist(&records).await
    }

    /// Removes the record with `id`. A miss is a no-op, not an error.
    pub async fn remove(&self, id: &str) -> Result<(), StorageError> {
        let mut records = self.load().await;
        records.retain(|r| r.id != id);
        self.persist(&records).await
    }

    async fn persist(&self, records: &[AnalysisRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records)?;
        self.backend.write(HISTORY_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::backend::MemoryStore;
    use chrono::Utc;

    fn record(id: &str) -> AnalysisRecord {
        AnalysisRecord {
            id: id.to_string(),
            file_name: format!("{id}.pdf"),
            uploaded_at: Utc::now(),
            name: None,
            email: None,
            phone: None,
            linkedin_url: None,
            portfolio_url: None,
            summary: None,
            work_experience: vec![],
            education: vec![],
            technical_skills: vec![],
            soft_skills: vec![],
            projects: vec![],
            certifications: vec![],
            resume_rating: 7,
            improvement_areas: String::new(),
            upskill_suggestions: vec![],
        }
    }

    fn memory_store() -> HistoryStore {
        HistoryStore::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_empty_history_loads_as_empty() {
        let store = memory_store();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_prepends_newest_first() {
        let store = memory_store();
        store.append(record("a")).await.unwrap();
        store.append(record("b")).await.unwrap();
        store.append(record("c")).await.unwrap();

        let ids: Vec<_> = store.load().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_load_after_append_contains_record_first() {
        let store = memory_store();
        store.append(record("a")).await.unwrap();
        let r = record("b");
        store.append(r.clone()).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded[0], r);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = memory_store();
        store.append(record("a")).await.unwrap();
        store.append(record("b")).await.unwrap();

        store.remove("a").await.unwrap();
        let after_first = store.load().await;
        store.remove("a").await.unwrap();
        let after_second = store.load().await;

        assert_eq!(after_first, after_second);
        assert!(!after_second.iter().any(|r| r.id == "a"));
        assert_eq!(after_second.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let store = memory_store();
        store.append(record("a")).await.unwrap();
        store.remove("nope").await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_blob_loads_as_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend.write(HISTORY_KEY, "not json {{{").await.unwrap();

        let store = HistoryStore::new(backend);
        assert!(store.load().await.is_empty());

        // and the next append replaces the corrupt blob
        store.append(record("a")).await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_blob_with_out_of_domain_rating_loads_as_empty() {
        let backend = Arc::new(MemoryStore::new());
        let blob = r#"[{
            "id": "a",
            "file_name": "cv.pdf",
            "uploaded_at": "2024-01-15T10:30:00Z",
            "resume_rating": 200
        }]"#;
        backend.write(HISTORY_KEY, blob).await.unwrap();

        let store = HistoryStore::new(backend);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_fs_backed_history_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = HistoryStore::new(Arc::new(backend::FsStore::new(dir.path())));
        store.append(record("a")).await.unwrap();
        drop(store);

        let reopened = HistoryStore::new(Arc::new(backend::FsStore::new(dir.path())));
        let ids: Vec<_> = reopened.load().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a"]);
    }
}
