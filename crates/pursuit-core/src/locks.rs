//! Per-case mutation locks.
//!
//! Every read-modify-write on a case runs while holding that case's lock,
//! so at most one mutation per case id is in flight. Different case ids
//! never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use pursuit_types::CaseId;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of one async mutex per case id.
///
/// Entries are created on demand and pruned once nobody holds or waits on
/// them, so the map stays proportional to the number of cases currently
/// being mutated.
#[derive(Debug, Default)]
pub struct CaseLocks {
    slots: Mutex<HashMap<CaseId, Arc<AsyncMutex<()>>>>,
}

impl CaseLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `case_id`.
    ///
    /// The guard releases the lock when dropped.
    pub async fn acquire(&self, case_id: CaseId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(case_id).or_default())
        };
        slot.lock_owned().await
    }

    /// Number of case ids with a live lock slot.
    pub fn active(&self) -> usize {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        slots.len()
    }
}
