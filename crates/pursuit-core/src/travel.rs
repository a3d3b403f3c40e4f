//! Travel transition, the only state change a case ever undergoes.
//!
//! Landing on the due hop advances the itinerary pointer. Landing on a hop
//! further down the itinerary is refused outright. Anywhere else is a
//! wrong turn: the player moves but the pointer stays put.

use pursuit_types::{Case, TravelOutcome};

/// What a travel attempt will do to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDecision {
    /// Refused; the case is left untouched.
    Rejected,
    /// The due hop; move and advance the pointer.
    Advance,
    /// Any other city; move without advancing.
    Wander,
}

/// Classify a move to `destination` without touching the case.
///
/// The destination is compared after trimming. The future-hop guard
/// ignores letter case; advancing needs an exact match.
pub fn evaluate(case: &Case, destination: &str) -> TravelDecision {
    let destination = destination.trim();
    if destination.is_empty() || case.is_future_hop(destination) {
        TravelDecision::Rejected
    } else if case.due_hop() == Some(destination) {
        TravelDecision::Advance
    } else {
        TravelDecision::Wander
    }
}

/// Apply a move to `case` in place and report the outcome.
pub fn apply(case: &mut Case, destination: &str) -> (TravelDecision, TravelOutcome) {
    let decision = evaluate(case, destination);
    let outcome = match decision {
        TravelDecision::Rejected => TravelOutcome::cannot_travel(),
        TravelDecision::Advance | TravelDecision::Wander => {
            destination.trim().clone_into(&mut case.current_city);
            if decision == TravelDecision::Advance {
                case.advance();
            }
            TravelOutcome::Moved {
                current_city: case.current_city.clone(),
            }
        }
    };
    (decision, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_hops() -> Case {
        Case::open(
            String::from("Bobo the Clown"),
            String::from("A jar of pickles"),
            vec![String::from("A"), String::from("B"), String::from("C")],
            String::from("Start"),
        )
    }

    #[test]
    fn skipping_ahead_is_refused() {
        let mut case = three_hops();
        let before = case.clone();
        let (decision, outcome) = apply(&mut case, "C");
        assert_eq!(decision, TravelDecision::Rejected);
        assert_eq!(outcome, TravelOutcome::cannot_travel());
        assert_eq!(case, before);

        let (decision, _) = apply(&mut case, "B");
        assert_eq!(decision, TravelDecision::Rejected);
        assert_eq!(case, before);
    }

    #[test]
    fn skipping_ahead_in_other_case_is_refused() {
        let mut case = three_hops();
        let before = case.clone();
        for city in ["c", " b ", "B"] {
            let (decision, outcome) = apply(&mut case, city);
            assert_eq!(decision, TravelDecision::Rejected);
            assert!(outcome.is_rejected());
            assert_eq!(case, before);
        }
    }

    #[test]
    fn due_hop_advances() {
        let mut case = three_hops();
        let (decision, outcome) = apply(&mut case, "A");
        assert_eq!(decision, TravelDecision::Advance);
        assert_eq!(
            outcome,
            TravelOutcome::Moved {
                current_city: String::from("A")
            }
        );
        assert_eq!(case.current_city, "A");
        assert_eq!(case.next_hop, 2);
    }

    #[test]
    fn off_itinerary_city_is_a_wrong_turn() {
        let mut case = three_hops();
        let (decision, outcome) = apply(&mut case, "Zzyzx");
        assert_eq!(decision, TravelDecision::Wander);
        assert!(!outcome.is_rejected());
        assert_eq!(case.current_city, "Zzyzx");
        assert_eq!(case.next_hop, 1);
    }

    #[test]
    fn passed_hop_is_a_wrong_turn() {
        let mut case = three_hops();
        apply(&mut case, "A");
        apply(&mut case, "B");
        let (decision, _) = apply(&mut case, "A");
        assert_eq!(decision, TravelDecision::Wander);
        assert_eq!(case.current_city, "A");
        assert_eq!(case.next_hop, 3);
    }

    #[test]
    fn full_itinerary_closes_case() {
        let mut case = three_hops();
        for hop in ["A", "B", "C"] {
            let (decision, _) = apply(&mut case, hop);
            assert_eq!(decision, TravelDecision::Advance);
        }
        assert_eq!(case.next_hop, 4);
        assert!(case.is_closed());

        let (decision, _) = apply(&mut case, "Lima");
        assert_eq!(decision, TravelDecision::Wander);
        assert_eq!(case.next_hop, 4);
    }

    #[test]
    fn destination_is_trimmed_and_blank_refused() {
        let mut case = three_hops();
        let (decision, _) = apply(&mut case, "  A ");
        assert_eq!(decision, TravelDecision::Advance);
        assert_eq!(case.current_city, "A");

        let before = case.clone();
        let (decision, _) = apply(&mut case, "   ");
        assert_eq!(decision, TravelDecision::Rejected);
        assert_eq!(case, before);
    }

    #[test]
    fn pointer_never_decreases_and_current_never_future() {
        let mut case = three_hops();
        let moves = ["Zzyzx", "C", "A", "A", "Start", "C", "B", "B", "A", "C", "C"];
        let mut last = case.next_hop;
        for city in moves {
            let (decision, _) = apply(&mut case, city);
            assert!(case.next_hop >= last);
            assert!(case.next_hop <= last.saturating_add(1));
            assert_eq!(decision == TravelDecision::Advance, case.next_hop > last);
            assert!(!case.is_future_hop(&case.current_city));
            last = case.next_hop;
        }
        assert_eq!(case.next_hop, 4);
    }
}
