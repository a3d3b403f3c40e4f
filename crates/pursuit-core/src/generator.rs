//! Content generator trait and catalog-backed stub implementation.
//!
//! Decoy destinations, witness clues and the cast of a new case come from
//! a [`ContentGenerator`]. It could be an LLM, a hand-written catalog, or
//! a test double; the engine only sees a request struct going in and a
//! response struct coming out, and enforces its own invariants on
//! whatever comes back.
//!
//! [`StubContentGenerator`] draws from the static pools in
//! [`catalog`](crate::catalog) and never touches the network.

use std::future::Future;

pub use pursuit_types::same_city;
use pursuit_types::Clue;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    CITIES, HINT_TEMPLATES, LANDMARKS, LAST_STOP_TEMPLATES, STOLEN_ITEMS, SUSPECTS,
};

/// Errors surfaced by a content generator.
///
/// The engine does not synthesize fallback content; any of these aborts
/// the operation that asked for content.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The backend failed or was unreachable.
    #[error("generator backend error: {0}")]
    Backend(String),

    /// The backend answered with content that breaks the contract.
    #[error("malformed generator output: {0}")]
    Malformed(String),
}

/// Request for the cast and itinerary of a new case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseProfileRequest {
    /// Number of hops the itinerary must have.
    pub hop_count: usize,
}

/// Cast and itinerary for a new case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseProfile {
    /// Suspect's name.
    pub suspect_name: String,
    /// Description of the stolen item.
    pub stolen_item: String,
    /// Where the player starts; must be outside the itinerary.
    pub starting_city: String,
    /// The suspect's itinerary, in order.
    pub hops: Vec<String>,
}

/// Request for a raw pool of travel candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRequest {
    /// The last hop the player got right, if any.
    pub previous_city: Option<String>,
    /// The hop that is due; the correct answer.
    pub next_city: String,
    /// Where the player is standing.
    pub current_city: String,
    /// Cities that must not be offered.
    pub exclude_list: Vec<String>,
    /// Total candidates wanted, the correct one included.
    pub count: usize,
}

/// Raw pool of travel candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationResponse {
    /// Candidate city names.
    pub destinations: Vec<String>,
}

/// Request for witness clues pointing at the suspect's next stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRequest {
    /// Suspect's name.
    pub suspect_name: String,
    /// Where the player is standing.
    pub current_city: String,
    /// The city the clues should point at. `None` when the player stands
    /// on the suspect's last stop; the clues then describe the suspect.
    pub next_city: Option<String>,
    /// Number of clues wanted.
    pub count: usize,
}

/// Witness clues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueResponse {
    /// Clues in presentation order.
    pub clues: Vec<Clue>,
}

/// A source of case content.
pub trait ContentGenerator: Send + Sync {
    /// Produce the cast and itinerary for a new case.
    fn case_profile(
        &self,
        request: &CaseProfileRequest,
    ) -> impl Future<Output = Result<CaseProfile, GenerationError>> + Send;

    /// Produce a pool of travel candidates.
    fn destinations(
        &self,
        request: &DestinationRequest,
    ) -> impl Future<Output = Result<DestinationResponse, GenerationError>> + Send;

    /// Produce witness clues.
    fn clues(
        &self,
        request: &ClueRequest,
    ) -> impl Future<Output = Result<ClueResponse, GenerationError>> + Send;
}

/// Catalog-backed generator. Stateless; randomness comes from the
/// thread-local RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubContentGenerator;

impl StubContentGenerator {
    /// Create a new stub generator.
    pub const fn new() -> Self {
        Self
    }
}

impl ContentGenerator for StubContentGenerator {
    async fn case_profile(
        &self,
        request: &CaseProfileRequest,
    ) -> Result<CaseProfile, GenerationError> {
        catalog_profile(&mut rand::rng(), request)
    }

    async fn destinations(
        &self,
        request: &DestinationRequest,
    ) -> Result<DestinationResponse, GenerationError> {
        Ok(catalog_destinations(&mut rand::rng(), request))
    }

    async fn clues(&self, request: &ClueRequest) -> Result<ClueResponse, GenerationError> {
        Ok(catalog_clues(&mut rand::rng(), request))
    }
}

/// Pick a suspect, an item, and `hop_count + 1` distinct cities: the
/// first is the starting point, the rest the itinerary.
pub fn catalog_profile(
    rng: &mut impl Rng,
    request: &CaseProfileRequest,
) -> Result<CaseProfile, GenerationError> {
    let needed = request.hop_count.saturating_add(1);
    if needed > CITIES.len() {
        return Err(GenerationError::Backend(format!(
            "catalog holds {} cities, itinerary needs {needed}",
            CITIES.len()
        )));
    }

    let suspect_name = SUSPECTS
        .choose(rng)
        .map(|s| (*s).to_owned())
        .ok_or_else(|| GenerationError::Backend(String::from("suspect pool is empty")))?;
    let stolen_item = STOLEN_ITEMS
        .choose(rng)
        .map(|s| (*s).to_owned())
        .ok_or_else(|| GenerationError::Backend(String::from("item pool is empty")))?;

    let mut cities: Vec<String> = CITIES.iter().map(|c| (*c).to_owned()).collect();
    cities.shuffle(rng);
    cities.truncate(needed);
    let starting_city = cities.remove(0);

    Ok(CaseProfile {
        suspect_name,
        stolen_item,
        starting_city,
        hops: cities,
    })
}

/// The due city plus `count - 1` catalog cities that are neither the
/// current city nor excluded.
pub fn catalog_destinations(rng: &mut impl Rng, request: &DestinationRequest) -> DestinationResponse {
    let mut pool: Vec<&str> = CITIES
        .iter()
        .copied()
        .filter(|city| {
            !same_city(city, &request.current_city)
                && !same_city(city, &request.next_city)
                && !request.exclude_list.iter().any(|ex| same_city(city, ex))
        })
        .collect();
    pool.shuffle(rng);

    let mut destinations = Vec::with_capacity(request.count);
    destinations.push(request.next_city.clone());
    destinations.extend(
        pool.into_iter()
            .take(request.count.saturating_sub(1))
            .map(str::to_owned),
    );
    destinations.shuffle(rng);

    DestinationResponse { destinations }
}

/// `count` witness lines about `next_city`, or about the suspect when no
/// next city is left, each at a different landmark of the current city
/// while landmarks last.
pub fn catalog_clues(rng: &mut impl Rng, request: &ClueRequest) -> ClueResponse {
    let mut landmarks: Vec<&str> = LANDMARKS.to_vec();
    landmarks.shuffle(rng);
    let (pool, placeholder, subject) = match &request.next_city {
        Some(city) => (HINT_TEMPLATES, "{city}", city.as_str()),
        None => (LAST_STOP_TEMPLATES, "{suspect}", request.suspect_name.as_str()),
    };
    let mut templates: Vec<&str> = pool.to_vec();
    templates.shuffle(rng);

    let clues = (0..request.count)
        .map(|i| {
            let landmark = landmarks
                .get(i.checked_rem(landmarks.len()).unwrap_or(0))
                .copied()
                .unwrap_or("Square");
            let template = templates
                .get(i.checked_rem(templates.len()).unwrap_or(0))
                .copied()
                .unwrap_or(placeholder);
            Clue::new(
                format!("{landmark}, {}", request.current_city),
                template.replace(placeholder, subject),
            )
        })
        .collect();

    ClueResponse { clues }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn profile_has_distinct_cities_and_off_track_start() {
        let mut rng = SmallRng::seed_from_u64(7);
        let profile = catalog_profile(&mut rng, &CaseProfileRequest { hop_count: 6 }).unwrap();

        assert_eq!(profile.hops.len(), 6);
        assert!(!profile.hops.contains(&profile.starting_city));
        let mut sorted = profile.hops.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
        assert!(!profile.suspect_name.is_empty());
        assert!(!profile.stolen_item.is_empty());
    }

    #[test]
    fn oversized_itinerary_is_refused() {
        let mut rng = SmallRng::seed_from_u64(7);
        let result = catalog_profile(&mut rng, &CaseProfileRequest { hop_count: 500 });
        assert!(matches!(result, Err(GenerationError::Backend(_))));
    }

    #[test]
    fn destinations_respect_exclusions() {
        let mut rng = SmallRng::seed_from_u64(11);
        let request = DestinationRequest {
            previous_city: Some(String::from("London")),
            next_city: String::from("Mumbai"),
            current_city: String::from("Tokyo"),
            exclude_list: vec![String::from("Paris"), String::from("Lima")],
            count: 4,
        };
        for _ in 0..50 {
            let response = catalog_destinations(&mut rng, &request);
            assert_eq!(response.destinations.len(), 4);
            assert!(response.destinations.contains(&String::from("Mumbai")));
            assert!(!response.destinations.contains(&String::from("Tokyo")));
            assert!(!response.destinations.contains(&String::from("Paris")));
            assert!(!response.destinations.contains(&String::from("Lima")));
        }
    }

    #[test]
    fn clues_point_at_next_city() {
        let mut rng = SmallRng::seed_from_u64(3);
        let response = catalog_clues(
            &mut rng,
            &ClueRequest {
                suspect_name: String::from("Bobo the Clown"),
                current_city: String::from("Bangalore"),
                next_city: Some(String::from("Oslo")),
                count: 3,
            },
        );
        assert_eq!(response.clues.len(), 3);
        for clue in &response.clues {
            assert!(clue.clue.contains("Oslo"));
            assert!(!clue.clue.contains("Bangalore"));
            assert!(clue.location.ends_with("Bangalore"));
        }
    }

    #[test]
    fn last_stop_clues_describe_suspect() {
        let mut rng = SmallRng::seed_from_u64(5);
        let response = catalog_clues(
            &mut rng,
            &ClueRequest {
                suspect_name: String::from("Bobo the Clown"),
                current_city: String::from("Sydney"),
                next_city: None,
                count: 3,
            },
        );
        assert_eq!(response.clues.len(), 3);
        for clue in &response.clues {
            assert!(clue.clue.contains("Bobo the Clown"));
            assert!(!clue.clue.contains('{'));
            assert!(clue.location.ends_with("Sydney"));
        }
    }
}
