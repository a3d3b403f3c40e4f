//! LLM backends over HTTP.
//!
//! Enum dispatch over the two supported API flavors. Both send one
//! request per prompt through a `reqwest` client whose timeout bounds the
//! call; nothing here retries.

use crate::config::{BackendType, LlmBackendConfig};
use crate::error::LlmError;
use crate::prompt::RenderedPrompt;

/// An LLM backend that turns a prompt into response text.
#[derive(Debug)]
pub enum LlmBackend {
    /// OpenAI-compatible chat completions API.
    OpenAi(OpenAiBackend),
    /// Anthropic Messages API.
    Anthropic(AnthropicBackend),
}

impl LlmBackend {
    /// Build the backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &LlmBackendConfig) -> Result<Self, LlmError> {
        Ok(match config.backend_type {
            BackendType::OpenAi => Self::OpenAi(OpenAiBackend::new(config)?),
            BackendType::Anthropic => Self::Anthropic(AnthropicBackend::new(config)?),
        })
    }

    /// Send a prompt and return the response text.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::LlmBackend`] if the call fails, times out, or the
    /// response has no text.
    pub async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, LlmError> {
        match self {
            Self::OpenAi(backend) => backend.complete(prompt).await,
            Self::Anthropic(backend) => backend.complete(prompt).await,
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => "openai-compatible",
            Self::Anthropic(_) => "anthropic",
        }
    }

    /// Model identifier in use.
    pub fn model(&self) -> &str {
        match self {
            Self::OpenAi(b) => &b.settings.model,
            Self::Anthropic(b) => &b.settings.model,
        }
    }
}

/// Connection state shared by both flavors.
#[derive(Debug)]
struct Settings {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl Settings {
    fn new(config: &LlmBackendConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

/// Send `body` and return the JSON reply, mapping HTTP failures.
async fn post_json(
    request: reqwest::RequestBuilder,
    body: &serde_json::Value,
    flavor: &str,
) -> Result<serde_json::Value, LlmError> {
    let response = request
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| LlmError::LlmBackend(format!("{flavor} request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_owned());
        return Err(LlmError::LlmBackend(format!(
            "{flavor} returned {status}: {error_body}"
        )));
    }

    response
        .json()
        .await
        .map_err(|e| LlmError::LlmBackend(format!("{flavor} response parse failed: {e}")))
}

// ---------------------------------------------------------------------------
// OpenAI-compatible backend
// ---------------------------------------------------------------------------

/// Backend for OpenAI-compatible chat completions APIs.
///
/// Sends requests to `{api_url}/chat/completions` and asks for a JSON
/// object response.
#[derive(Debug)]
pub struct OpenAiBackend {
    settings: Settings,
}

impl OpenAiBackend {
    /// Create a new `OpenAI`-compatible backend.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &LlmBackendConfig) -> Result<Self, LlmError> {
        Ok(Self {
            settings: Settings::new(config)?,
        })
    }

    async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, LlmError> {
        let s = &self.settings;
        let body = serde_json::json!({
            "model": s.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user}
            ],
            "temperature": s.temperature,
            "max_tokens": s.max_tokens,
            "response_format": {"type": "json_object"}
        });

        let mut request = s.client.post(format!("{}/chat/completions", s.api_url));
        if !s.api_key.is_empty() {
            request = request.bearer_auth(&s.api_key);
        }
        let json = post_json(request, &body, "OpenAI").await?;
        extract_openai_content(&json)
    }
}

/// Pull `choices[0].message.content` out of a chat completions reply.
fn extract_openai_content(json: &serde_json::Value) -> Result<String, LlmError> {
    json.pointer("/choices/0/message/content")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            LlmError::LlmBackend("OpenAI response missing choices[0].message.content".to_owned())
        })
}

// ---------------------------------------------------------------------------
// Anthropic Messages API backend
// ---------------------------------------------------------------------------

/// Backend for the Anthropic Messages API.
///
/// The system prompt is a top-level field, authentication uses the
/// `x-api-key` header, and text comes back in `content[0].text`.
#[derive(Debug)]
pub struct AnthropicBackend {
    settings: Settings,
}

impl AnthropicBackend {
    /// Create a new Anthropic Messages API backend.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &LlmBackendConfig) -> Result<Self, LlmError> {
        Ok(Self {
            settings: Settings::new(config)?,
        })
    }

    async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, LlmError> {
        let s = &self.settings;
        let body = serde_json::json!({
            "model": s.model,
            "max_tokens": s.max_tokens,
            "temperature": s.temperature,
            "system": prompt.system,
            "messages": [
                {"role": "user", "content": prompt.user}
            ]
        });

        let request = s
            .client
            .post(format!("{}/messages", s.api_url))
            .header("x-api-key", &s.api_key)
            .header("anthropic-version", "2023-06-01");
        let json = post_json(request, &body, "Anthropic").await?;
        extract_anthropic_content(&json)
    }
}

/// Pull `content[0].text` out of a Messages API reply.
fn extract_anthropic_content(json: &serde_json::Value) -> Result<String, LlmError> {
    json.pointer("/content/0/text")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            LlmError::LlmBackend("Anthropic response missing content[0].text".to_owned())
        })
}
