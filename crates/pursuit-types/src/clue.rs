//! Clue payloads and the fixed texts the dispatcher hands out.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clue text for a city the suspect never passed through.
pub const NO_SIGHTING_CLUE: &str = "No one with the suspect's description was seen here";

/// Clue text surrounding the arrest line once the suspect is cornered.
pub const CLOSING_IN_CLUE: &str = "Watch your step. You are getting close";

/// The arrest confirmation for `suspect_name`.
pub fn arrest_clue(suspect_name: &str) -> String {
    format!("Congratulations! You have arrested the suspect, {suspect_name}")
}

/// A single clue, always tagged with the place it was picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Clue {
    /// City or place where the clue was found.
    pub location: String,
    /// The clue text.
    pub clue: String,
}

impl Clue {
    /// Build a clue from anything string-like.
    pub fn new(location: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            clue: clue.into(),
        }
    }
}

/// The ordered clues returned for one dispatch call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClueSheet {
    /// Clues in presentation order.
    pub clues: Vec<Clue>,
}
