//! Shared application state for the API server.
//!
//! [`AppState`] owns the one [`CaseEngine`] every handler talks to. The
//! concrete store and generator are picked at startup, so both are
//! wrapped in enums that dispatch to the configured backend.

use pursuit_core::config::{GeneratorConfig, GeneratorKind};
use pursuit_core::{
    CaseEngine, CaseProfile, CaseProfileRequest, ClueRequest, ClueResponse, ContentGenerator,
    DestinationRequest, DestinationResponse, GameConfig, GenerationError, StubContentGenerator,
};
use pursuit_db::CaseStoreBackend;
use pursuit_llm::{LlmContentGenerator, LlmError};

/// Content generator selected at runtime.
#[derive(Debug)]
pub enum ContentBackend {
    /// Built-in catalog.
    Stub(StubContentGenerator),
    /// LLM over HTTP.
    Llm(LlmContentGenerator),
}

impl ContentBackend {
    /// Build the configured generator.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] if the LLM generator cannot be set up.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, LlmError> {
        Ok(match config.backend {
            GeneratorKind::Stub => Self::Stub(StubContentGenerator::new()),
            GeneratorKind::Llm => Self::Llm(LlmContentGenerator::from_config(config)?),
        })
    }

    /// Short backend name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stub(_) => "stub",
            Self::Llm(_) => "llm",
        }
    }
}

impl ContentGenerator for ContentBackend {
    async fn case_profile(
        &self,
        request: &CaseProfileRequest,
    ) -> Result<CaseProfile, GenerationError> {
        match self {
            Self::Stub(g) => g.case_profile(request).await,
            Self::Llm(g) => g.case_profile(request).await,
        }
    }

    async fn destinations(
        &self,
        request: &DestinationRequest,
    ) -> Result<DestinationResponse, GenerationError> {
        match self {
            Self::Stub(g) => g.destinations(request).await,
            Self::Llm(g) => g.destinations(request).await,
        }
    }

    async fn clues(&self, request: &ClueRequest) -> Result<ClueResponse, GenerationError> {
        match self {
            Self::Stub(g) => g.clues(request).await,
            Self::Llm(g) => g.clues(request).await,
        }
    }
}

/// The engine type the server runs.
pub type Engine = CaseEngine<CaseStoreBackend, ContentBackend>;

/// Shared state passed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// The case engine.
    pub engine: Engine,
}

impl AppState {
    /// Wrap an engine.
    pub const fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// In-memory store with the catalog generator.
    pub fn in_memory(game: GameConfig) -> Self {
        Self::new(CaseEngine::new(
            CaseStoreBackend::Memory(pursuit_core::MemoryCaseStore::new()),
            ContentBackend::Stub(StubContentGenerator::new()),
            game,
        ))
    }
}
