// Docstring refinement
//
// Alternates between asking the oracle whether a module docstring needs
// work and asking it for a better one, for a bounded number of rounds.

pub mod controller;
pub mod prompts;
pub mod verdict;

pub use controller::{RefineOutcome, RefinementController};
pub use prompts::Guidance;
pub use verdict::{parse_verdict, VerificationVerdict};

/// What a good module docstring looks like, embedded at compile time.
///
/// Sent verbatim in both the verification and generation prompts.
pub const DOCSTRING_PRACTICE: &str = include_str!("docstring_practice.md");
