//! LLM-backed content generation for Pursuit.
//!
//! Suspects, decoy cities and witness clues can come from a language model
//! instead of the built-in catalog. This crate renders each generator
//! request through an on-disk `minijinja` template, sends it to an
//! OpenAI-compatible or Anthropic endpoint with `reqwest`, and parses the
//! reply back into the request's response struct.
//!
//! # Modules
//!
//! - [`config`] -- Backend settings and API key lookup
//! - [`prompt`] -- Template loading and rendering
//! - [`llm`] -- HTTP backends
//! - [`parse`] -- Tolerant JSON extraction
//! - [`generator`] -- The [`ContentGenerator`](pursuit_core::ContentGenerator) implementation
//! - [`error`] -- Error types

pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod parse;
pub mod prompt;

pub use config::{BackendType, LlmBackendConfig};
pub use error::LlmError;
pub use generator::LlmContentGenerator;
pub use llm::LlmBackend;
pub use prompt::{PromptEngine, PromptKind, RenderedPrompt};
