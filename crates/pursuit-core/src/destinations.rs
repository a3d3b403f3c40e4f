//! Destination resolver: builds the multiple-choice list of travel
//! candidates for the current stage of a case.
//!
//! One answer is right (the due hop). The rest are decoys drawn from the
//! generator's raw pool after removing the current city, every other hop
//! on the itinerary, and duplicates. Hops already passed are excluded so
//! the player is never invited to backtrack, and future hops are excluded
//! because travelling to them is refused.

use std::collections::BTreeSet;

use pursuit_types::{Case, DestinationSet};
use tracing::warn;

use crate::generator::{ContentGenerator, DestinationRequest, GenerationError, same_city};

/// Resolve the travel candidates for `case`.
///
/// A closed case gets an empty set paired with the current city.
pub async fn resolve_destinations<G: ContentGenerator>(
    generator: &G,
    case: &Case,
    destination_count: usize,
) -> Result<DestinationSet, GenerationError> {
    let Some(due) = case.due_hop() else {
        return Ok(DestinationSet::closed(case.current_city.clone()));
    };

    let request = destination_request(case, due, destination_count);
    let response = generator.destinations(&request).await?;

    let wanted = destination_count.saturating_sub(1).max(1);
    let decoys = select_decoys(&response.destinations, &request, wanted);
    if decoys.is_empty() {
        warn!(
            case_id = %case.case_id,
            raw_count = response.destinations.len(),
            "generator offered no usable decoys"
        );
        return Err(GenerationError::Malformed(String::from(
            "no usable decoy destinations",
        )));
    }

    let mut destinations: BTreeSet<String> = decoys.into_iter().collect();
    destinations.insert(due.to_owned());

    Ok(DestinationSet {
        city: case.current_city.clone(),
        destinations,
    })
}

/// Build the generator request for the due hop of `case`.
pub fn destination_request(case: &Case, due: &str, count: usize) -> DestinationRequest {
    let mut exclude_list: Vec<String> = Vec::new();
    for hop in case.passed_hops().iter().chain(case.future_hops()) {
        if !exclude_list.iter().any(|ex| same_city(ex, hop)) {
            exclude_list.push(hop.clone());
        }
    }

    DestinationRequest {
        previous_city: case.passed_hops().last().cloned(),
        next_city: due.to_owned(),
        current_city: case.current_city.clone(),
        exclude_list,
        count,
    }
}

/// Keep up to `limit` raw candidates that are neither the answer, the
/// current city, an excluded city, nor a repeat.
pub fn select_decoys(raw: &[String], request: &DestinationRequest, limit: usize) -> Vec<String> {
    let mut decoys: Vec<String> = Vec::with_capacity(limit);
    for candidate in raw {
        if decoys.len() >= limit {
            break;
        }
        let city = candidate.trim();
        let usable = !city.is_empty()
            && !same_city(city, &request.next_city)
            && !same_city(city, &request.current_city)
            && !request.exclude_list.iter().any(|ex| same_city(ex, city))
            && !decoys.iter().any(|d| same_city(d, city));
        if usable {
            decoys.push(city.to_owned());
        }
    }
    decoys
}
