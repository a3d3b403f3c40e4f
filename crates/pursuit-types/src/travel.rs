//! Destination and travel payloads exchanged with callers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::CaseId;

/// Error text returned when a travel request skips ahead on the itinerary.
pub const CANNOT_TRAVEL: &str = "You cannot travel to that city";

/// Travel candidates offered from the player's current city.
///
/// Serialized as `{"city": .., "destinations": [..]}`. Empty once the
/// case is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DestinationSet {
    /// The city the player is standing in.
    pub city: String,
    /// Candidate cities, without duplicates.
    pub destinations: BTreeSet<String>,
}

impl DestinationSet {
    /// A set with no candidates, used once the chase is over.
    pub const fn closed(city: String) -> Self {
        Self {
            city,
            destinations: BTreeSet::new(),
        }
    }
}

/// Body of a travel request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TravelRequest {
    /// The case to move.
    pub case_id: CaseId,
    /// Destination city.
    pub city: String,
}

/// Result of a travel attempt.
///
/// A rejected move is an ordinary game outcome, not a fault, so both
/// shapes are plain data: `{"current_city": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum TravelOutcome {
    /// The player is now standing in `current_city`.
    Moved {
        /// The city the player arrived in.
        current_city: String,
    },
    /// The move was refused; state is unchanged.
    Rejected {
        /// Why the move was refused.
        error: String,
    },
}

impl TravelOutcome {
    /// The standard refusal for a skip-ahead move.
    pub fn cannot_travel() -> Self {
        Self::Rejected {
            error: CANNOT_TRAVEL.to_owned(),
        }
    }

    /// Whether the move was refused.
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
