//! Case factory: turns a generated profile into a fresh [`Case`].
//!
//! The generator proposes the suspect, the item, a starting city and the
//! itinerary. The factory trims every name and refuses any profile whose
//! itinerary is the wrong length, repeats a city, or starts the player
//! somewhere on the itinerary.

use pursuit_types::Case;

use crate::config::GameConfig;
use crate::generator::{CaseProfile, CaseProfileRequest, ContentGenerator, GenerationError, same_city};

/// Ask the generator for a profile and open a case from it.
///
/// The case is not persisted here; the engine does that.
pub async fn build_case<G: ContentGenerator>(
    generator: &G,
    config: &GameConfig,
) -> Result<Case, GenerationError> {
    let request = CaseProfileRequest {
        hop_count: config.hop_count,
    };
    let profile = generator.case_profile(&request).await?;
    let profile = validate_profile(profile, config.hop_count)?;

    Ok(Case::open(
        profile.suspect_name,
        profile.stolen_item,
        profile.hops,
        profile.starting_city,
    ))
}

/// Trim a profile and check it against the itinerary rules.
pub fn validate_profile(
    profile: CaseProfile,
    hop_count: usize,
) -> Result<CaseProfile, GenerationError> {
    let suspect_name = profile.suspect_name.trim().to_owned();
    let stolen_item = profile.stolen_item.trim().to_owned();
    let starting_city = profile.starting_city.trim().to_owned();
    let hops: Vec<String> = profile
        .hops
        .iter()
        .map(|hop| hop.trim().to_owned())
        .collect();

    if suspect_name.is_empty() {
        return Err(GenerationError::Malformed(String::from("empty suspect name")));
    }
    if stolen_item.is_empty() {
        return Err(GenerationError::Malformed(String::from("empty stolen item")));
    }
    if starting_city.is_empty() {
        return Err(GenerationError::Malformed(String::from("empty starting city")));
    }
    if hops.len() != hop_count {
        return Err(GenerationError::Malformed(format!(
            "itinerary has {} hops, expected {hop_count}",
            hops.len()
        )));
    }
    if hops.iter().any(String::is_empty) {
        return Err(GenerationError::Malformed(String::from(
            "itinerary contains an empty city",
        )));
    }
    for (i, hop) in hops.iter().enumerate() {
        if hops.iter().skip(i.saturating_add(1)).any(|other| same_city(hop, other)) {
            return Err(GenerationError::Malformed(format!(
                "itinerary visits {hop} twice"
            )));
        }
    }
    if hops.iter().any(|hop| same_city(hop, &starting_city)) {
        return Err(GenerationError::Malformed(format!(
            "starting city {starting_city} is on the itinerary"
        )));
    }

    Ok(CaseProfile {
        suspect_name,
        stolen_item,
        starting_city,
        hops,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::generator::StubContentGenerator;

    fn profile(hops: &[&str], start: &str) -> CaseProfile {
        CaseProfile {
            suspect_name: String::from("Madame Mirage"),
            stolen_item: String::from("A Faberge egg"),
            starting_city: start.to_owned(),
            hops: hops.iter().map(|h| (*h).to_owned()).collect(),
        }
    }

    #[tokio::test]
    async fn built_case_has_reference_shape() {
        let config = GameConfig::default();
        let case = build_case(&StubContentGenerator::new(), &config).await.unwrap();

        assert!(!case.case_id.to_string().is_empty());
        assert_eq!(case.hops.len(), 6);
        assert_eq!(case.next_hop, 1);
        assert!(!case.hops.contains(&case.current_city));
    }

    #[test]
    fn names_are_trimmed() {
        let validated = validate_profile(profile(&[" Rome ", "Oslo"], " Accra"), 2).unwrap();
        assert_eq!(validated.hops, ["Rome", "Oslo"]);
        assert_eq!(validated.starting_city, "Accra");
    }

    #[test]
    fn wrong_length_is_malformed() {
        let result = validate_profile(profile(&["Rome"], "Accra"), 2);
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn repeated_city_is_malformed() {
        let result = validate_profile(profile(&["Rome", "rome"], "Accra"), 2);
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn start_on_itinerary_is_malformed() {
        let result = validate_profile(profile(&["Rome", "Oslo"], "Oslo"), 2);
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }
}
