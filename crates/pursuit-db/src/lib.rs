//! Case store backends for Pursuit.
//!
//! The engine talks to storage only through
//! [`CaseStore`](pursuit_core::CaseStore). This crate provides the
//! durable implementations and a [`CaseStoreBackend`] enum that picks one
//! at startup from configuration.
//!
//! # Backends
//!
//! ```text
//! store.backend
//!     |
//!     +-- memory    --> MemoryCaseStore   (process-local map)
//!     +-- file      --> FileCaseStore     (one JSON document)
//!     +-- dragonfly --> DragonflyCaseStore (case:{id} keys + index set)
//! ```
//!
//! # Modules
//!
//! - [`dragonfly`] -- `Dragonfly` (Redis-compatible) storage
//! - [`file_store`] -- Single-file JSON storage
//! - [`error`] -- Shared error types

pub mod dragonfly;
pub mod error;
pub mod file_store;

use std::collections::BTreeMap;

use pursuit_core::config::{StoreConfig, StoreKind};
use pursuit_core::{CaseStore, MemoryCaseStore, StoreError};
use pursuit_types::{Case, CaseId};

// Re-export primary types for convenience.
pub use dragonfly::DragonflyCaseStore;
pub use error::DbError;
pub use file_store::FileCaseStore;

/// Store selected at runtime from [`StoreConfig`].
#[derive(Debug)]
pub enum CaseStoreBackend {
    /// In-memory map.
    Memory(MemoryCaseStore),
    /// JSON file.
    File(FileCaseStore),
    /// `Dragonfly` instance.
    Dragonfly(DragonflyCaseStore),
}

impl CaseStoreBackend {
    /// Build the configured backend, connecting if it is remote.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the `Dragonfly` connection cannot be set up.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, DbError> {
        let backend = match config.backend {
            StoreKind::Memory => Self::Memory(MemoryCaseStore::new()),
            StoreKind::File => Self::File(FileCaseStore::new(&config.path)),
            StoreKind::Dragonfly => Self::Dragonfly(
                DragonflyCaseStore::connect(&config.dragonfly_url, config.case_ttl_seconds)
                    .await?,
            ),
        };
        tracing::info!(backend = backend.name(), "Case store ready");
        Ok(backend)
    }

    /// Short backend name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
            Self::Dragonfly(_) => "dragonfly",
        }
    }
}

impl CaseStore for CaseStoreBackend {
    async fn get(&self, case_id: CaseId) -> Result<Option<Case>, StoreError> {
        match self {
            Self::Memory(s) => s.get(case_id).await,
            Self::File(s) => s.get(case_id).await,
            Self::Dragonfly(s) => s.get(case_id).await,
        }
    }

    async fn get_all(&self) -> Result<BTreeMap<CaseId, Case>, StoreError> {
        match self {
            Self::Memory(s) => s.get_all().await,
            Self::File(s) => s.get_all().await,
            Self::Dragonfly(s) => s.get_all().await,
        }
    }

    async fn put(&self, case: &Case) -> Result<(), StoreError> {
        match self {
            Self::Memory(s) => s.put(case).await,
            Self::File(s) => s.put(case).await,
            Self::Dragonfly(s) => s.put(case).await,
        }
    }
}
