//! Error types for the case engine.
//!
//! A rejected travel move is not an error: it comes back as
//! [`TravelOutcome::Rejected`](pursuit_types::TravelOutcome). Everything
//! here is either a missing case or a collaborator outage.

use pursuit_types::CaseId;

use crate::generator::GenerationError;
use crate::store::StoreError;

/// Errors returned by the public case operations.
#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    /// No case has the requested id.
    #[error("case not found: {0}")]
    NotFound(CaseId),

    /// The content generator failed or broke its contract.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The case store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
