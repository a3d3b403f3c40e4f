//! The [`Case`] record, the only persisted entity.
//!
//! A case is a self-contained aggregate: who did it, what was taken, the
//! itinerary the suspect actually followed, where the player is standing,
//! and how far along the itinerary the player has got. Only the travel
//! transition mutates it, and only `current_city` and `next_hop`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::CaseId;

/// One instance of the chase.
///
/// `next_hop` is a 1-based pointer into `hops`. It starts at 1 and may run
/// one past the end of the itinerary, which means the suspect has been
/// cornered and the case is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Case {
    /// Opaque unique identifier, assigned at creation.
    pub case_id: CaseId,
    /// Name of the suspect being chased.
    pub suspect_name: String,
    /// Description of the stolen item.
    pub stolen_item: String,
    /// The city the player is currently standing in.
    pub current_city: String,
    /// The itinerary the suspect followed, in order.
    pub hops: Vec<String>,
    /// 1-based pointer to the hop the player must discover next.
    pub next_hop: u32,
    /// When the case was opened. Records written without it load with
    /// the load time.
    #[serde(default = "Utc::now")]
    pub opened_at: DateTime<Utc>,
}

impl Case {
    /// Open a new case with a fresh identifier and `next_hop = 1`.
    pub fn open(
        suspect_name: String,
        stolen_item: String,
        hops: Vec<String>,
        starting_city: String,
    ) -> Self {
        Self {
            case_id: CaseId::new(),
            suspect_name,
            stolen_item,
            current_city: starting_city,
            hops,
            next_hop: 1,
            opened_at: Utc::now(),
        }
    }

    /// Zero-based index of the due hop. May be `>= hops.len()`.
    pub fn next_index(&self) -> usize {
        usize::try_from(self.next_hop)
            .unwrap_or(usize::MAX)
            .saturating_sub(1)
    }

    /// The hop that is due next (`hops[next_hop - 1]`), if any remain.
    pub fn due_hop(&self) -> Option<&str> {
        self.hops.get(self.next_index()).map(String::as_str)
    }

    /// Whether the itinerary is exhausted and the suspect caught.
    pub fn is_closed(&self) -> bool {
        self.next_index() >= self.hops.len()
    }

    /// Hops strictly before the due hop.
    pub fn passed_hops(&self) -> &[String] {
        let end = self.next_index().min(self.hops.len());
        self.hops.get(..end).unwrap_or(&[])
    }

    /// Hops strictly after the due hop.
    pub fn future_hops(&self) -> &[String] {
        let start = self.next_index().saturating_add(1).min(self.hops.len());
        self.hops.get(start..).unwrap_or(&[])
    }

    /// Whether `city` names a hop further down the itinerary than the due
    /// one, ignoring letter case and padding.
    pub fn is_future_hop(&self, city: &str) -> bool {
        self.future_hops().iter().any(|hop| same_city(hop, city))
    }

    /// Whether the player is standing in the due hop.
    pub fn is_at_due_hop(&self) -> bool {
        self.due_hop() == Some(self.current_city.as_str())
    }

    /// Move the pointer one hop forward.
    pub const fn advance(&mut self) {
        self.next_hop = self.next_hop.saturating_add(1);
    }
}

/// Case-insensitive, whitespace-tolerant city comparison.
pub fn same_city(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample(next_hop: u32) -> Case {
        let mut case = Case::open(
            String::from("Picasso Peculiar"),
            String::from("The Louvre's Laughing Mona Lisa"),
            ["Paris", "Rome", "Cairo", "Tokyo", "New York", "Sydney"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            String::from("Chennai"),
        );
        case.next_hop = next_hop;
        case
    }

    #[test]
    fn open_starts_at_first_hop() {
        let case = sample(1);
        assert_eq!(case.next_hop, 1);
        assert_eq!(case.due_hop(), Some("Paris"));
        assert!(case.passed_hops().is_empty());
        assert!(!case.is_closed());
    }

    #[test]
    fn hop_partitions_around_pointer() {
        let case = sample(3);
        assert_eq!(case.due_hop(), Some("Cairo"));
        assert_eq!(case.passed_hops(), ["Paris", "Rome"]);
        assert_eq!(case.future_hops(), ["Tokyo", "New York", "Sydney"]);
        assert!(case.is_future_hop("New York"));
        assert!(!case.is_future_hop("Cairo"));
        assert!(!case.is_future_hop("Rome"));
    }

    #[test]
    fn future_hop_ignores_letter_case() {
        let case = sample(3);
        assert!(case.is_future_hop("new york"));
        assert!(case.is_future_hop("  SYDNEY "));
        assert!(!case.is_future_hop("york"));
    }

    #[test]
    fn same_city_ignores_case_and_padding() {
        assert!(same_city(" new york", "New York "));
        assert!(!same_city("York", "New York"));
    }

    #[test]
    fn pointer_past_end_closes_case() {
        let case = sample(7);
        assert!(case.is_closed());
        assert_eq!(case.due_hop(), None);
        assert_eq!(case.passed_hops().len(), 6);
        assert!(case.future_hops().is_empty());
    }

    #[test]
    fn advance_moves_pointer() {
        let mut case = sample(1);
        case.advance();
        assert_eq!(case.next_hop, 2);
        assert_eq!(case.due_hop(), Some("Rome"));
    }

    #[test]
    fn record_without_timestamp_still_loads() {
        let json = serde_json::json!({
            "case_id": "8d354a22-4ee1-4eb5-a594-aa6a60a2d6c5",
            "suspect_name": "Picasso Peculiar",
            "current_city": "Chennai",
            "stolen_item": "The Louvre's Laughing Mona Lisa",
            "hops": ["Paris", "Rome", "Cairo", "Tokyo", "New York", "Sydney"],
            "next_hop": 3
        });
        let case: Case = serde_json::from_value(json).unwrap();
        assert_eq!(case.next_hop, 3);
        assert_eq!(case.due_hop(), Some("Cairo"));
    }
}
