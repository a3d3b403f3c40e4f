//! Case progression engine for Pursuit.
//!
//! This crate owns the rules of the chase: how a case is opened, which
//! destinations are offered, which clues a player hears, and how a travel
//! move changes a case. Storage and content generation are collaborators
//! reached through the [`CaseStore`] and [`ContentGenerator`] traits.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration and typed settings
//! - [`catalog`] -- Static pools behind the stub generator
//! - [`generator`] -- Content generator contract and stub implementation
//! - [`store`] -- Case store contract and in-memory implementation
//! - [`factory`] -- Opening new cases
//! - [`destinations`] -- Travel candidate resolution
//! - [`clues`] -- Clue mode selection and dispatch
//! - [`travel`] -- The travel transition
//! - [`locks`] -- Per-case mutation locks
//! - [`engine`] -- Public case operations
//! - [`error`] -- Engine error type

pub mod catalog;
pub mod clues;
pub mod config;
pub mod destinations;
pub mod engine;
pub mod error;
pub mod factory;
pub mod generator;
pub mod locks;
pub mod store;
pub mod travel;

pub use clues::ClueMode;
pub use config::{ConfigError, GameConfig, PursuitConfig};
pub use engine::CaseEngine;
pub use error::CaseError;
pub use generator::{
    CaseProfile, CaseProfileRequest, ClueRequest, ClueResponse, ContentGenerator,
    DestinationRequest, DestinationResponse, GenerationError, StubContentGenerator,
};
pub use locks::CaseLocks;
pub use store::{CaseStore, MemoryCaseStore, StoreError};
pub use travel::TravelDecision;
