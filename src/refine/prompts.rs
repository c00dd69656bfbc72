// Prompt construction for the verify and generate steps

use super::DOCSTRING_PRACTICE;

/// Which problems the verifier is asked to look for in a given round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    /// First round: stale content and style problems
    StalenessAndStyle,
    /// Later rounds: style problems only
    StyleOnly,
}

impl Guidance {
    pub fn for_round(round: usize) -> Self {
        if round == 0 {
            Self::StalenessAndStyle
        } else {
            Self::StyleOnly
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::StalenessAndStyle => {
                "The docstring can require an update for two reasons:\n\
                 1. The code was updated and docstring is out-dated, or\n\
                 2. The docstring doesn't follow PEP 257 or it deviates from best practices \
                 for clarity and maintainability."
            }
            Self::StyleOnly => {
                "The docstring requires an update only if it doesn't follow PEP 257 or it \
                 deviates from best practices for clarity and maintainability."
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StalenessAndStyle => "staleness + style",
            Self::StyleOnly => "style only",
        }
    }
}

/// Ask whether the docstring needs an update and why
pub fn verification_prompt(guidance: Guidance, docstring: &str, code: &str) -> String {
    format!(
        "You are an expert developer who specializes in good documentation.\n\
         Your current task is to determine if the module docstring needs to be updated.\n\
         {guidance}\n\n\
         {practice}\n\
         Docstring:\n\
         {docstring}\n\n\
         Code:\n\
         {code}\n\n\
         Respond 'True' if the docstring needs to be updated, otherwise 'False', \
         followed by the reason the docstring needs updated.",
        guidance = guidance.text(),
        practice = DOCSTRING_PRACTICE,
    )
}

/// Ask for a replacement docstring as bare prose
pub fn generation_prompt(docstring: &str, reason: Option<&str>, code: &str) -> String {
    format!(
        "Analyze the following Python code and generate a module-level docstring.\n\
         1. Provide only the text, do not put it in a code block or inside triple quotes. \
         Your response will be placed in the standard triple quotes automatically.\n\
         2. Adhere to PEP 257 and best practices for clarity and maintainability.\n\n\
         {practice}\n\
         Old Docstring:\n\
         {docstring}\n\n\
         Problems with Old Docstring:\n\
         {reason}\n\n\
         Code:\n\
         {code}\n\n\
         Generated docstring:",
        practice = DOCSTRING_PRACTICE,
        reason = reason.unwrap_or("None"),
    )
}
