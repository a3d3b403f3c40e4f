//! Case store trait and in-memory implementation.
//!
//! The engine needs exactly three things from durable storage: fetch one
//! case by id, list every case, and write a case back. The [`CaseStore`]
//! trait captures that contract so the concrete medium (a map, a JSON
//! file, `Dragonfly`) stays a collaborator concern.
//!
//! [`MemoryCaseStore`] keeps cases in a process-local map. It backs the
//! tests and the `memory` store backend.

use std::collections::BTreeMap;
use std::future::Future;

use pursuit_types::{Case, CaseId};
use tokio::sync::RwLock;

/// Errors raised by a case store.
///
/// The engine never retries; these propagate to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing medium failed (connection, command, file system).
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored record could not be encoded or decoded.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File-system I/O failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable keyed storage of case records.
pub trait CaseStore: Send + Sync {
    /// Fetch one case, or `None` when no case has that id.
    fn get(
        &self,
        case_id: CaseId,
    ) -> impl Future<Output = Result<Option<Case>, StoreError>> + Send;

    /// Every stored case keyed by id. Empty when nothing is stored.
    fn get_all(&self) -> impl Future<Output = Result<BTreeMap<CaseId, Case>, StoreError>> + Send;

    /// Insert or replace a case.
    fn put(&self, case: &Case) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Process-local case store.
#[derive(Debug, Default)]
pub struct MemoryCaseStore {
    cases: RwLock<BTreeMap<CaseId, Case>>,
}

impl MemoryCaseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cases.
    pub async fn len(&self) -> usize {
        self.cases.read().await.len()
    }

    /// Whether the store holds no cases.
    pub async fn is_empty(&self) -> bool {
        self.cases.read().await.is_empty()
    }

    /// Drop every case.
    pub async fn clear(&self) {
        self.cases.write().await.clear();
    }
}

impl CaseStore for MemoryCaseStore {
    async fn get(&self, case_id: CaseId) -> Result<Option<Case>, StoreError> {
        Ok(self.cases.read().await.get(&case_id).cloned())
    }

    async fn get_all(&self) -> Result<BTreeMap<CaseId, Case>, StoreError> {
        Ok(self.cases.read().await.clone())
    }

    async fn put(&self, case: &Case) -> Result<(), StoreError> {
        self.cases.write().await.insert(case.case_id, case.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Case {
        Case::open(
            String::from("Bobo the Clown"),
            String::from("A golden kazoo"),
            vec![String::from("Lima"), String::from("Oslo")],
            String::from("Accra"),
        )
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryCaseStore::new();
        let all = store.get_all().await.unwrap();
        assert!(all.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn put_then_get_returns_same_case() {
        let store = MemoryCaseStore::new();
        let case = sample();
        store.put(&case).await.unwrap();
        let loaded = store.get(case.case_id).await.unwrap();
        assert_eq!(loaded, Some(case));
    }

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let store = MemoryCaseStore::new();
        let mut case = sample();
        store.put(&case).await.unwrap();
        case.next_hop = 32;
        store.put(&case).await.unwrap();
        let loaded = store.get(case.case_id).await.unwrap().unwrap();
        assert_eq!(loaded.next_hop, 32);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn missing_case_is_none() {
        let store = MemoryCaseStore::new();
        let loaded = store.get(CaseId::new()).await;
        assert!(matches!(loaded, Ok(None)));
    }
}
