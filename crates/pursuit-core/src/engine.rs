//! The case engine: public case-facing operations.
//!
//! [`CaseEngine`] wires a [`CaseStore`] and a [`ContentGenerator`]
//! together behind four game operations plus two read-only lookups. Only
//! [`CaseEngine::travel`] mutates a stored case, and it does so under the
//! case's lock so concurrent moves on one case serialize.

use std::collections::BTreeMap;

use pursuit_types::{Case, CaseId, ClueSheet, DestinationSet, TravelOutcome};
use tracing::{debug, info};

use crate::clues;
use crate::config::GameConfig;
use crate::destinations;
use crate::error::CaseError;
use crate::factory;
use crate::generator::ContentGenerator;
use crate::locks::CaseLocks;
use crate::store::CaseStore;
use crate::travel::{self, TravelDecision};

/// Game engine over a store and a content generator.
#[derive(Debug)]
pub struct CaseEngine<S, G> {
    store: S,
    generator: G,
    config: GameConfig,
    locks: CaseLocks,
}

impl<S: CaseStore, G: ContentGenerator> CaseEngine<S, G> {
    /// Create an engine with the given collaborators and game shape.
    pub fn new(store: S, generator: G, config: GameConfig) -> Self {
        Self {
            store,
            generator,
            config,
            locks: CaseLocks::new(),
        }
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The content generator.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// The game shape this engine plays with.
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Open a new case and persist it.
    pub async fn create_case(&self) -> Result<Case, CaseError> {
        let case = factory::build_case(&self.generator, &self.config).await?;
        self.store.put(&case).await?;
        info!(
            case_id = %case.case_id,
            suspect = %case.suspect_name,
            hops = case.hops.len(),
            "case opened"
        );
        Ok(case)
    }

    /// Travel candidates for the current stage of a case.
    pub async fn resolve_destinations(&self, case_id: CaseId) -> Result<DestinationSet, CaseError> {
        let case = self.case(case_id).await?;
        let set =
            destinations::resolve_destinations(&self.generator, &case, self.config.destination_count)
                .await?;
        debug!(%case_id, offered = set.destinations.len(), "destinations resolved");
        Ok(set)
    }

    /// Clues for the city the player is standing in.
    pub async fn dispatch_clues(&self, case_id: CaseId) -> Result<ClueSheet, CaseError> {
        let case = self.case(case_id).await?;
        Ok(clues::dispatch_clues(&self.generator, &case, self.config.clue_count).await?)
    }

    /// Move the player to `destination`.
    ///
    /// A refused move is returned as [`TravelOutcome::Rejected`] and leaves
    /// the stored case untouched. Accepted moves are persisted before the
    /// lock is released.
    pub async fn travel(&self, case_id: CaseId, destination: &str) -> Result<TravelOutcome, CaseError> {
        let _guard = self.locks.acquire(case_id).await;

        let mut case = self.case(case_id).await?;
        let from = case.current_city.clone();
        let (decision, outcome) = travel::apply(&mut case, destination);

        match decision {
            TravelDecision::Rejected => {
                info!(%case_id, destination, "travel refused");
            }
            TravelDecision::Advance | TravelDecision::Wander => {
                self.store.put(&case).await?;
                info!(
                    %case_id,
                    from = %from,
                    to = %case.current_city,
                    next_hop = case.next_hop,
                    advanced = decision == TravelDecision::Advance,
                    closed = case.is_closed(),
                    "travelled"
                );
            }
        }
        Ok(outcome)
    }

    /// Fetch one case.
    pub async fn case(&self, case_id: CaseId) -> Result<Case, CaseError> {
        self.store
            .get(case_id)
            .await?
            .ok_or(CaseError::NotFound(case_id))
    }

    /// Every stored case keyed by id.
    pub async fn cases(&self) -> Result<BTreeMap<CaseId, Case>, CaseError> {
        Ok(self.store.get_all().await?)
    }
}
