//! Connection settings for the LLM backend.
//!
//! The non-secret settings come from the `generator` section of
//! `pursuit-config.yaml`. The API key never lives in the file: the config
//! names an environment variable and the key is read from it at startup.

use std::time::Duration;

use pursuit_core::config::GeneratorConfig;

use crate::error::LlmError;

/// Resolved settings for one LLM backend.
#[derive(Debug, Clone)]
pub struct LlmBackendConfig {
    /// The API flavor to speak.
    pub backend_type: BackendType,
    /// Base API URL (e.g. `https://api.openai.com/v1`).
    pub api_url: String,
    /// API key for authentication. Empty for keyless local endpoints.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens per completion.
    pub max_tokens: u32,
    /// HTTP client timeout for one call.
    pub timeout: Duration,
}

/// Supported LLM API flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// `OpenAI`-compatible chat completions (`OpenAI`, `DeepSeek`, Ollama).
    OpenAi,
    /// Anthropic Messages API.
    Anthropic,
}

impl BackendType {
    /// Parse a provider name from config.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] for an unknown provider.
    pub fn parse(provider: &str) -> Result<Self, LlmError> {
        match provider.trim().to_ascii_lowercase().as_str() {
            "openai" | "deepseek" | "ollama" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(LlmError::Config(format!("unknown LLM provider: {other}"))),
        }
    }
}

impl LlmBackendConfig {
    /// Resolve settings from the generator config, reading the API key from
    /// the process environment.
    ///
    /// # Errors
    ///
    /// See [`LlmBackendConfig::resolve`].
    pub fn from_generator_config(config: &GeneratorConfig) -> Result<Self, LlmError> {
        Self::resolve(config, |name| std::env::var(name).ok())
    }

    /// Resolve settings from the generator config, looking the API key up
    /// through `lookup`.
    ///
    /// The `ollama` provider runs without a key; every other provider
    /// requires the named variable to be set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] for an unknown provider, an empty URL or
    /// model, or a missing key.
    pub fn resolve<F>(config: &GeneratorConfig, lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_type = BackendType::parse(&config.provider)?;
        let keyless = config.provider.trim().eq_ignore_ascii_case("ollama");

        let api_url = config.api_url.trim().trim_end_matches('/').to_owned();
        if api_url.is_empty() {
            return Err(LlmError::Config(String::from("generator.api_url is empty")));
        }
        if config.model.trim().is_empty() {
            return Err(LlmError::Config(String::from("generator.model is empty")));
        }

        let api_key = lookup(&config.api_key_env)
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty());
        let api_key = match api_key {
            Some(key) => key,
            None if keyless => String::new(),
            None => {
                return Err(LlmError::Config(format!(
                    "missing environment variable: {}",
                    config.api_key_env
                )));
            }
        };

        Ok(Self {
            backend_type,
            api_url,
            api_key,
            model: config.model.trim().to_owned(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: Duration::from_millis(config.request_timeout_ms),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn generator(provider: &str) -> GeneratorConfig {
        GeneratorConfig {
            provider: provider.to_owned(),
            api_url: String::from("https://api.example.com/v1/"),
            api_key_env: String::from("TEST_KEY"),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn key_comes_from_named_variable() {
        let config = LlmBackendConfig::resolve(&generator("openai"), |name| {
            (name == "TEST_KEY").then(|| String::from(" sk-test "))
        })
        .unwrap();
        assert_eq!(config.backend_type, BackendType::OpenAi);
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_url, "https://api.example.com/v1");
    }

    #[test]
    fn missing_key_is_config_error() {
        let result = LlmBackendConfig::resolve(&generator("anthropic"), |_| None);
        assert!(matches!(result, Err(LlmError::Config(_))));
    }

    #[test]
    fn ollama_needs_no_key() {
        let config = LlmBackendConfig::resolve(&generator("ollama"), |_| None).unwrap();
        assert_eq!(config.backend_type, BackendType::OpenAi);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(matches!(BackendType::parse("carrier-pigeon"), Err(LlmError::Config(_))));
        assert!(matches!(BackendType::parse(" Anthropic "), Ok(BackendType::Anthropic)));
    }
}
