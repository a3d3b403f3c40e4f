//! Single-file JSON case storage.
//!
//! The whole store is one JSON object mapping case ids to case records.
//! Every write rewrites the file through a sibling temp file and a rename,
//! so a crash mid-write leaves the previous contents intact. A missing
//! file reads as an empty store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pursuit_core::{CaseStore, StoreError};
use pursuit_types::{Case, CaseId};
use tokio::sync::Mutex;

use crate::error::DbError;

/// Case store persisted to a JSON file.
#[derive(Debug)]
pub struct FileCaseStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file.
    write_lock: Mutex<()>,
}

impl FileCaseStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Io`] on read failure other than a missing file,
    /// and [`DbError::Serialization`] if the contents are not a case map.
    pub async fn load(&self) -> Result<BTreeMap<CaseId, Case>, DbError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replace the file contents with `cases`.
    async fn save(&self, cases: &BTreeMap<CaseId, Case>) -> Result<(), DbError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(cases)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Insert or replace one case.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the file cannot be read, decoded or written.
    pub async fn put_case(&self, case: &Case) -> Result<(), DbError> {
        let _guard = self.write_lock.lock().await;
        let mut cases = self.load().await?;
        cases.insert(case.case_id, case.clone());
        self.save(&cases).await?;
        tracing::debug!(case_id = %case.case_id, path = %self.path.display(), "Case written");
        Ok(())
    }
}

impl CaseStore for FileCaseStore {
    async fn get(&self, case_id: CaseId) -> Result<Option<Case>, StoreError> {
        Ok(self.load().await?.remove(&case_id))
    }

    async fn get_all(&self) -> Result<BTreeMap<CaseId, Case>, StoreError> {
        Ok(self.load().await?)
    }

    async fn put(&self, case: &Case) -> Result<(), StoreError> {
        Ok(self.put_case(case).await?)
    }
}
