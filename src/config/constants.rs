// Project-wide constants
//
// Centralised here so model defaults and loop bounds have one source of
// truth. Import via `use crate::config::constants::*;`.

/// Default chat model for the documentation oracle.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default base URL for the OpenAI-compatible chat completions API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default maximum tokens per oracle reply.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Nucleus sampling parameter. Fixed, not configurable.
pub const TOP_P: f32 = 0.95;

/// Frequency and presence penalties. Fixed, not configurable.
pub const FREQUENCY_PENALTY: f32 = 0.0;
pub const PRESENCE_PENALTY: f32 = 0.0;

/// Number of verify → generate → replace rounds per file.
pub const MAX_REFINEMENT_DEPTH: usize = 3;

/// Attempts at getting a parseable verdict before falling back to "needs update".
pub const MAX_RETRY_DEPTH: usize = 3;

/// Source files we know how to document.
pub const DEFAULT_SOURCE_EXTENSION: &str = "py";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
