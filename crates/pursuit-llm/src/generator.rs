//! [`ContentGenerator`] implementation backed by an LLM.
//!
//! Each request struct is rendered through its template, sent as one
//! completion, and the reply parsed straight into the matching response
//! struct. The engine validates the content; this layer only guarantees
//! the shape.

use pursuit_core::config::GeneratorConfig;
use pursuit_core::{
    CaseProfile, CaseProfileRequest, ClueRequest, ClueResponse, ContentGenerator,
    DestinationRequest, DestinationResponse, GenerationError,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::LlmBackendConfig;
use crate::error::LlmError;
use crate::llm::LlmBackend;
use crate::parse::parse_json;
use crate::prompt::{PromptEngine, PromptKind};

/// Content generator that asks an LLM for every piece of content.
#[derive(Debug)]
pub struct LlmContentGenerator {
    backend: LlmBackend,
    prompts: PromptEngine,
}

impl LlmContentGenerator {
    /// Assemble a generator from a ready backend and prompt set.
    pub const fn new(backend: LlmBackend, prompts: PromptEngine) -> Self {
        Self { backend, prompts }
    }

    /// Build from the `generator` config section, reading the API key from
    /// the environment and the templates from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] if the key is missing, the provider is unknown,
    /// or the templates cannot be loaded.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, LlmError> {
        let backend_config = LlmBackendConfig::from_generator_config(config)?;
        let backend = LlmBackend::from_config(&backend_config)?;
        let prompts = PromptEngine::new(&config.templates_dir)?;
        tracing::info!(
            backend = backend.name(),
            model = backend.model(),
            templates_dir = %config.templates_dir,
            "LLM content generator ready"
        );
        Ok(Self::new(backend, prompts))
    }

    /// The backend in use.
    pub const fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    async fn ask<Req, Resp>(&self, kind: PromptKind, request: &Req) -> Result<Resp, LlmError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let prompt = self.prompts.render(kind, request)?;
        let raw = self.backend.complete(&prompt).await?;
        debug!(
            prompt = kind.template_name(),
            response_len = raw.len(),
            "LLM replied"
        );
        parse_json(&raw).inspect_err(|e| {
            warn!(prompt = kind.template_name(), error = %e, "unusable LLM reply");
        })
    }
}

impl ContentGenerator for LlmContentGenerator {
    async fn case_profile(
        &self,
        request: &CaseProfileRequest,
    ) -> Result<CaseProfile, GenerationError> {
        Ok(self.ask(PromptKind::Case, request).await?)
    }

    async fn destinations(
        &self,
        request: &DestinationRequest,
    ) -> Result<DestinationResponse, GenerationError> {
        Ok(self.ask(PromptKind::Destinations, request).await?)
    }

    async fn clues(&self, request: &ClueRequest) -> Result<ClueResponse, GenerationError> {
        Ok(self.ask(PromptKind::Clues, request).await?)
    }
}
