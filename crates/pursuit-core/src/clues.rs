//! Clue dispatcher.
//!
//! Which clues a player gets depends on a [`ClueMode`] derived from the
//! case on every call. The mode is never stored, so it cannot drift from
//! the record it describes.

use pursuit_types::{CLOSING_IN_CLUE, Case, Clue, ClueSheet, NO_SIGHTING_CLUE, arrest_clue};
use rand::Rng;
use tracing::{debug, warn};

use crate::generator::{ClueRequest, ContentGenerator, GenerationError};

/// Clue delivery mode for a case in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueMode {
    /// The player is not standing in the due hop.
    Mismatch,
    /// The player is standing in the due hop.
    OnTrack,
    /// The itinerary is exhausted and the suspect cornered.
    Final,
}

impl ClueMode {
    /// Derive the mode from case state.
    pub fn for_case(case: &Case) -> Self {
        if case.is_closed() {
            Self::Final
        } else if case.is_at_due_hop() {
            Self::OnTrack
        } else {
            Self::Mismatch
        }
    }

    /// Stable lowercase name for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mismatch => "mismatch",
            Self::OnTrack => "on_track",
            Self::Final => "final",
        }
    }
}

/// Produce the clue sheet for `case`.
///
/// Mismatch and final sheets are built locally. On-track sheets come from
/// the generator, point at the hop after the current city, and must
/// contain exactly `clue_count` non-empty clues.
pub async fn dispatch_clues<G: ContentGenerator>(
    generator: &G,
    case: &Case,
    clue_count: usize,
) -> Result<ClueSheet, GenerationError> {
    let mode = ClueMode::for_case(case);
    debug!(case_id = %case.case_id, mode = mode.as_str(), "dispatching clues");

    match mode {
        ClueMode::Mismatch => Ok(mismatch_clues(case, clue_count)),
        ClueMode::Final => Ok(final_clues(case, clue_count, arrest_slot(clue_count))),
        ClueMode::OnTrack => {
            let request = ClueRequest {
                suspect_name: case.suspect_name.clone(),
                current_city: case.current_city.clone(),
                next_city: upcoming_hop(case).map(str::to_owned),
                count: clue_count,
            };
            let response = generator.clues(&request).await?;
            let clues = validate_clues(response.clues, clue_count).inspect_err(|e| {
                warn!(case_id = %case.case_id, error = %e, "rejected generated clues");
            })?;
            Ok(ClueSheet { clues })
        }
    }
}

/// The hop after the one the player stands on, `None` on the last stop.
fn upcoming_hop(case: &Case) -> Option<&str> {
    case.next_index()
        .checked_add(1)
        .and_then(|i| case.hops.get(i))
        .map(String::as_str)
}

/// Every clue is the no-sighting line, tagged with the current city.
pub fn mismatch_clues(case: &Case, clue_count: usize) -> ClueSheet {
    let clues = (0..clue_count)
        .map(|_| Clue::new(case.current_city.as_str(), NO_SIGHTING_CLUE))
        .collect();
    ClueSheet { clues }
}

/// One arrest line at `slot`, closing-in warnings everywhere else.
///
/// A `slot` past the end is clamped to the last position.
pub fn final_clues(case: &Case, clue_count: usize, slot: usize) -> ClueSheet {
    let slot = slot.min(clue_count.saturating_sub(1));
    let clues = (0..clue_count)
        .map(|i| {
            if i == slot {
                Clue::new(case.current_city.as_str(), arrest_clue(&case.suspect_name))
            } else {
                Clue::new(case.current_city.as_str(), CLOSING_IN_CLUE)
            }
        })
        .collect();
    ClueSheet { clues }
}

/// Random position for the arrest line.
fn arrest_slot(clue_count: usize) -> usize {
    if clue_count == 0 {
        return 0;
    }
    rand::rng().random_range(0..clue_count)
}

/// Trim generated clues and require exactly `clue_count` complete ones.
fn validate_clues(clues: Vec<Clue>, clue_count: usize) -> Result<Vec<Clue>, GenerationError> {
    if clues.len() != clue_count {
        return Err(GenerationError::Malformed(format!(
            "expected {clue_count} clues, got {}",
            clues.len()
        )));
    }
    clues
        .into_iter()
        .map(|c| {
            let location = c.location.trim();
            let text = c.clue.trim();
            if location.is_empty() || text.is_empty() {
                Err(GenerationError::Malformed(String::from(
                    "clue with empty location or text",
                )))
            } else {
                Ok(Clue::new(location, text))
            }
        })
        .collect()
}
