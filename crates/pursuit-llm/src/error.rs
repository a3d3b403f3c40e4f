//! Error types for the LLM content generator.
//!
//! Every failure collapses into a [`GenerationError`] at the
//! [`ContentGenerator`](pursuit_core::ContentGenerator) boundary: output
//! that arrived but could not be understood is `Malformed`, everything
//! else is `Backend`.

use pursuit_core::GenerationError;

/// Errors that can occur while generating content through an LLM.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Failed to load or render a prompt template.
    #[error("template render error: {0}")]
    Template(String),

    /// An LLM backend returned an error or was unreachable.
    #[error("LLM backend error: {0}")]
    LlmBackend(String),

    /// The LLM response did not contain the expected JSON.
    #[error("response parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(_) | LlmError::Serde(_) => Self::Malformed(err.to_string()),
            LlmError::Template(_) | LlmError::LlmBackend(_) | LlmError::Config(_) => {
                Self::Backend(err.to_string())
            }
        }
    }
}
