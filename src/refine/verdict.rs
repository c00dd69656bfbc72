// Verification verdicts parsed from free-text oracle replies

/// The oracle's judgement on the current docstring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationVerdict {
    /// The docstring should be regenerated. `reason` is `None` when the
    /// oracle gave none, or when no parseable verdict was ever received.
    NeedsUpdate { reason: Option<String> },
    NoUpdateNeeded,
}

impl VerificationVerdict {
    pub fn needs_update(&self) -> bool {
        matches!(self, Self::NeedsUpdate { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::NeedsUpdate { reason } => reason.as_deref(),
            Self::NoUpdateNeeded => None,
        }
    }
}

/// Chars skipped after a leading `True` before the reason starts
const REASON_OFFSET: usize = 5;

/// Parse a verification reply.
///
/// A reply starting with `True` needs an update, with everything after the
/// first five characters as the reason. A reply starting with `False` does
/// not. Anything else is unparseable and yields `None`.
pub fn parse_verdict(response: &str) -> Option<VerificationVerdict> {
    let response = response.trim();

    if response.starts_with("True") {
        let reason: String = response.chars().skip(REASON_OFFSET).collect();
        let reason = reason.trim();
        Some(VerificationVerdict::NeedsUpdate {
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        })
    } else if response.starts_with("False") {
        Some(VerificationVerdict::NoUpdateNeeded)
    } else {
        None
    }
}
