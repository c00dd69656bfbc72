// Documentation oracle
//
// The external text-generation capability consulted for both verifying and
// drafting docstrings. The refinement loop only sees the `Oracle` trait, so
// tests can swap in a scripted fake.

use anyhow::Result;
use async_trait::async_trait;

mod history;
pub mod openai;
mod types;

pub use history::SessionLog;
pub use openai::OpenAIOracle;
pub use types::ChatMessage;

/// Trait for documentation oracles
#[async_trait]
pub trait Oracle: Send {
    /// Send one prompt and return the model's reply text
    async fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Forget any conversation memory. Called before each file.
    fn reset_session(&mut self) {}

    /// Name for logging (usually the model identifier)
    fn name(&self) -> &str;
}

/// Failures of a single oracle call. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("request to the completions API failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("completions API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse completions API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("completions API returned no choices")]
    EmptyChoices,
}
