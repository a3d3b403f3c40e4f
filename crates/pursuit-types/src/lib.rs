//! Shared type definitions for the Pursuit case engine.
//!
//! This crate is the single source of truth for the data that crosses
//! crate boundaries: the persisted [`Case`] record and the payloads the
//! public case operations return. Types flow to `TypeScript` via `ts-rs`
//! for the game client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for case identifiers
//! - [`case`] -- The persisted case record
//! - [`clue`] -- Clue payloads and fixed clue texts
//! - [`travel`] -- Destination sets, travel requests and outcomes

pub mod case;
pub mod clue;
pub mod ids;
pub mod travel;

// Re-export all public types at crate root for convenience.
pub use case::{Case, same_city};
pub use clue::{CLOSING_IN_CLUE, Clue, ClueSheet, NO_SIGHTING_CLUE, arrest_clue};
pub use ids::CaseId;
pub use travel::{CANNOT_TRAVEL, DestinationSet, TravelOutcome, TravelRequest};
