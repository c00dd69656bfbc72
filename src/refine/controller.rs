// Verify-and-refine loop driving the documentation oracle

use anyhow::{Context, Result};
use std::path::Path;

use super::prompts::{generation_prompt, verification_prompt, Guidance};
use super::verdict::{parse_verdict, VerificationVerdict};
use crate::config::RefineConfig;
use crate::docblock::{extract, read_source, replace_in_file};
use crate::oracle::Oracle;

/// How a `refine` run ended. Both variants are normal completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineOutcome {
    /// Round `round` reported that no update was needed
    Converged { round: usize, updates: usize },
    /// Every round ran and the last one still asked for an update
    DepthExhausted { updates: usize },
}

impl RefineOutcome {
    /// Number of docstring rewrites applied
    pub fn updates(&self) -> usize {
        match self {
            Self::Converged { updates, .. } | Self::DepthExhausted { updates } => *updates,
        }
    }
}

/// Drives verify → generate → replace rounds for one file at a time.
///
/// Holds no per-file state; the same controller is reused across a batch.
pub struct RefinementController<O: Oracle> {
    oracle: O,
    config: RefineConfig,
}

impl<O: Oracle> RefinementController<O> {
    pub fn new(oracle: O, config: RefineConfig) -> Self {
        Self { oracle, config }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Ask the oracle whether the docstring of `path` needs an update.
    ///
    /// Unparseable replies are retried up to `max_retry_depth` times. If none
    /// parses, the result is `NeedsUpdate` with no reason.
    pub async fn verify(&mut self, path: &Path, round: usize) -> Result<VerificationVerdict> {
        let content = read_source(path).await?;
        let extracted = extract(&content);

        let guidance = Guidance::for_round(round);
        tracing::info!(round, guidance = guidance.label(), "Verifying {}", path.display());
        tracing::debug!("Guidance: {}", guidance.text());

        let prompt = verification_prompt(guidance, extracted.block_text(), extracted.remainder);
        let max_attempts = self.config.max_retry_depth;

        for attempt in 1..=max_attempts {
            let response = self
                .oracle
                .ask(&prompt)
                .await
                .context("Oracle call failed during verification")?;

            match parse_verdict(&response) {
                Some(verdict @ VerificationVerdict::NeedsUpdate { .. }) => {
                    tracing::info!(
                        round,
                        reason = verdict.reason().unwrap_or(""),
                        "Docstring needs update"
                    );
                    return Ok(verdict);
                }
                Some(VerificationVerdict::NoUpdateNeeded) => {
                    tracing::info!(round, response = response.trim(), "Docstring update not required");
                    return Ok(VerificationVerdict::NoUpdateNeeded);
                }
                None => {
                    tracing::warn!(
                        round,
                        attempt,
                        max_attempts,
                        "Unparseable verification reply: {}",
                        response.trim()
                    );
                }
            }
        }

        tracing::warn!(
            round,
            "No parseable verdict after {} attempts, assuming the docstring needs an update",
            max_attempts
        );
        Ok(VerificationVerdict::NeedsUpdate { reason: None })
    }

    /// Ask the oracle for a replacement docstring, returned trimmed and unvalidated
    pub async fn generate(&mut self, path: &Path, reason: Option<&str>) -> Result<String> {
        let content = read_source(path).await?;
        let extracted = extract(&content);

        let prompt = generation_prompt(extracted.block_text(), reason, extracted.remainder);
        let response = self
            .oracle
            .ask(&prompt)
            .await
            .context("Oracle call failed during generation")?;

        Ok(response.trim().to_string())
    }

    /// Write `text` as the docstring of `path`
    pub async fn replace(&self, path: &Path, text: &str) -> Result<()> {
        replace_in_file(path, text).await?;
        tracing::info!("Docstring updated in {}", path.display());
        Ok(())
    }

    /// Run up to `max_refinement_depth` rounds on `path`, stopping at the
    /// first round that needs no update.
    ///
    /// Starts from a fresh oracle session so no file sees another's turns.
    pub async fn refine(&mut self, path: &Path) -> Result<RefineOutcome> {
        let mut updates = 0;
        self.oracle.reset_session();
        tracing::debug!(
            oracle = self.oracle.name(),
            max_rounds = self.config.max_refinement_depth,
            "Refining {}",
            path.display()
        );

        for round in 0..self.config.max_refinement_depth {
            let verdict = self.verify(path, round).await?;

            let VerificationVerdict::NeedsUpdate { reason } = verdict else {
                tracing::info!(round, updates, "Docstring refinement converged for {}", path.display());
                return Ok(RefineOutcome::Converged { round, updates });
            };

            let text = self.generate(path, reason.as_deref()).await?;
            self.replace(path, &text).await?;
            updates += 1;
        }

        tracing::info!(
            updates,
            "Docstring refined for {} (round limit reached)",
            path.display()
        );
        Ok(RefineOutcome::DepthExhausted { updates })
    }
}
