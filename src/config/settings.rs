// Configuration structs

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::oracle::ChatMessage;

/// Errors raised while assembling or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no API key found: set OPENAI_API_KEY or add `api_key` to the config file")]
    MissingCredential,

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the documentation oracle (model client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Model identifier sent with every request
    pub model: String,

    /// Base URL of the OpenAI-compatible API (no trailing `/v1`)
    pub base_url: String,

    /// Maximum tokens per reply
    pub max_tokens: u32,

    /// Sampling temperature (0.0 to 2.0)
    pub temperature: f32,

    /// Fixed system instruction prepended to every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,

    /// Messages inserted after the system instruction on every request
    pub injected_messages: Vec<ChatMessage>,

    /// Replay earlier turns of this session into every later call.
    /// Cost grows with every round, so it is off unless asked for.
    pub save_messages: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            system_message: None,
            injected_messages: Vec::new(),
            save_messages: false,
        }
    }
}

/// Bounds for the verify-and-refine loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineConfig {
    /// Rounds of verify → generate → replace per file
    pub max_refinement_depth: usize,

    /// Attempts at a parseable verdict within one round
    pub max_retry_depth: usize,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_refinement_depth: MAX_REFINEMENT_DEPTH,
            max_retry_depth: MAX_RETRY_DEPTH,
        }
    }
}

/// Fully resolved configuration, built once by the entry point
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential for the oracle
    pub api_key: String,

    pub oracle: OracleConfig,

    pub refine: RefineConfig,

    /// Extension (without the dot) of files the tool will touch
    pub source_extension: String,
}

impl Config {
    /// Build a config with defaults around a credential
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            oracle: OracleConfig::default(),
            refine: RefineConfig::default(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        if self.oracle.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.oracle.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be at least 1".into()));
        }
        if !(0.0..=2.0).contains(&self.oracle.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.oracle.temperature
            )));
        }
        if self.refine.max_refinement_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_refinement_depth must be at least 1".into(),
            ));
        }
        if self.refine.max_retry_depth == 0 {
            return Err(ConfigError::Invalid("max_retry_depth must be at least 1".into()));
        }
        if self.source_extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::Invalid("source_extension must not be empty".into()));
        }
        Ok(())
    }
}
