//! Configuration loading and typed config structures for Pursuit.
//!
//! The canonical configuration lives in `pursuit-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates the
//! file. Every section is optional; missing values fall back to the
//! defaults documented on each field.

use std::path::Path;

use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "pursuit-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range or inconsistent.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PursuitConfig {
    /// Game tunables (itinerary length, candidate and clue counts).
    #[serde(default)]
    pub game: GameConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Case store selection.
    #[serde(default)]
    pub store: StoreConfig,

    /// Content generator selection.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PursuitConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override file values (see
    /// [`PursuitConfig::apply_env_overrides`]).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, apply environment
    /// overrides and validate the result.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `PURSUIT_CONFIG`, else `pursuit-config.yaml` if present,
    /// else built-in defaults (still subject to env overrides).
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("PURSUIT_CONFIG") {
            return Self::from_file(Path::new(&path));
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::from_file(default_path);
        }
        Self::parse("{}")
    }

    /// Apply overrides from the environment.
    ///
    /// - `PURSUIT_PORT` overrides `server.port`
    /// - `PURSUIT_STORE_PATH` overrides `store.path`
    /// - `DRAGONFLY_URL` overrides `store.dragonfly_url`
    /// - `PURSUIT_GENERATOR` overrides `generator.backend`
    ///
    /// `lookup` resolves a variable name to its value.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PURSUIT_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("invalid PURSUIT_PORT: {e}")))?;
        }
        if let Some(path) = lookup("PURSUIT_STORE_PATH") {
            self.store.path = path;
        }
        if let Some(url) = lookup("DRAGONFLY_URL") {
            self.store.dragonfly_url = url;
        }
        if let Some(backend) = lookup("PURSUIT_GENERATOR") {
            self.generator.backend = match backend.to_lowercase().as_str() {
                "stub" => GeneratorKind::Stub,
                "llm" => GeneratorKind::Llm,
                other => {
                    return Err(ConfigError::Invalid(format!(
                        "unknown generator backend: {other}"
                    )));
                }
            };
        }
        Ok(())
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }
}

/// Game tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Number of cities in a new itinerary.
    #[serde(default = "default_hop_count")]
    pub hop_count: usize,

    /// Candidates offered per destination call, the correct one included.
    #[serde(default = "default_destination_count")]
    pub destination_count: usize,

    /// Clues returned per dispatch call.
    #[serde(default = "default_clue_count")]
    pub clue_count: usize,
}

impl GameConfig {
    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hop_count == 0 {
            return Err(ConfigError::Invalid(String::from(
                "game.hop_count must be at least 1",
            )));
        }
        if self.destination_count < 2 {
            return Err(ConfigError::Invalid(String::from(
                "game.destination_count must be at least 2",
            )));
        }
        if self.clue_count == 0 {
            return Err(ConfigError::Invalid(String::from(
                "game.clue_count must be at least 1",
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hop_count: default_hop_count(),
            destination_count: default_destination_count(),
            clue_count: default_clue_count(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which case store backs the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Process-local map; lost on restart.
    Memory,
    /// A single JSON file mapping case id to case.
    File,
    /// `Dragonfly` (Redis-compatible) keys.
    Dragonfly,
}

/// Case store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Selected backend.
    #[serde(default = "default_store_kind")]
    pub backend: StoreKind,

    /// JSON file path for the `file` backend.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Redis URL for the `dragonfly` backend.
    #[serde(default = "default_dragonfly_url")]
    pub dragonfly_url: String,

    /// Optional case expiry for the `dragonfly` backend.
    #[serde(default)]
    pub case_ttl_seconds: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_kind(),
            path: default_store_path(),
            dragonfly_url: default_dragonfly_url(),
            case_ttl_seconds: None,
        }
    }
}

/// Which content generator backs the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Built-in catalog, no network.
    Stub,
    /// LLM over HTTP.
    Llm,
}

/// Content generator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    /// Selected backend.
    #[serde(default = "default_generator_kind")]
    pub backend: GeneratorKind,

    /// LLM API flavor: `openai` (also `deepseek`, `ollama`) or `anthropic`.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base API URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Directory holding the prompt templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound on a single LLM call.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: default_generator_kind(),
            provider: default_provider(),
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            templates_dir: default_templates_dir(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

const fn default_hop_count() -> usize {
    6
}

const fn default_destination_count() -> usize {
    4
}

const fn default_clue_count() -> usize {
    3
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8000
}

const fn default_store_kind() -> StoreKind {
    StoreKind::File
}

fn default_store_path() -> String {
    String::from("cases.json")
}

fn default_dragonfly_url() -> String {
    String::from("redis://localhost:6379")
}

const fn default_generator_kind() -> GeneratorKind {
    GeneratorKind::Stub
}

fn default_provider() -> String {
    String::from("openai")
}

fn default_api_url() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

fn default_api_key_env() -> String {
    String::from("PURSUIT_LLM_API_KEY")
}

fn default_templates_dir() -> String {
    String::from("templates")
}

const fn default_temperature() -> f32 {
    0.9
}

const fn default_max_tokens() -> u32 {
    1024
}

const fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}
