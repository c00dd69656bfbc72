// Leading docstring extraction and replacement
//
// A docblock is the first triple-quoted string of a file, allowing only
// whitespace before it. Matching is non-greedy and happens once.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use std::path::Path;

static DOCBLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)\A\s*("""(.*?)"""|'''(.*?)''')"#).expect("docblock pattern must compile")
});

/// Delimiter written around every generated docblock
pub const DOCBLOCK_DELIMITER: &str = "\"\"\"";

/// The leading documentation block of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocBlock<'a> {
    raw: &'a str,
    start: usize,
}

impl<'a> DocBlock<'a> {
    /// Block text including its delimiters
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Byte span of the block (delimiters included) in the original content
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.raw.len()
    }

    /// Text between the delimiters
    pub fn inner(&self) -> &'a str {
        &self.raw[3..self.raw.len() - 3]
    }
}

/// A file split into its optional docblock and everything after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub block: Option<DocBlock<'a>>,
    /// Code after the block with leading whitespace removed, or the whole
    /// content when there is no block
    pub remainder: &'a str,
}

impl<'a> Extracted<'a> {
    /// Block text for prompts, `None` when the file has no docblock
    pub fn block_text(&self) -> &'a str {
        self.block.map(|block| block.raw()).unwrap_or("None")
    }
}

/// Split `content` into its leading docblock (if any) and the remainder
pub fn extract(content: &str) -> Extracted<'_> {
    let Some(caps) = DOCBLOCK_RE.captures(content) else {
        return Extracted {
            block: None,
            remainder: content,
        };
    };

    let whole = caps.get(0).map(|m| m.end()).unwrap_or(0);
    let block = caps.get(1).map(|m| DocBlock {
        raw: m.as_str(),
        start: m.start(),
    });

    Extracted {
        block,
        remainder: content[whole..].trim_start(),
    }
}

/// Render a file whose docblock is `text`, followed by one blank line and
/// `remainder`. The result always ends with a newline.
pub fn render(text: &str, remainder: &str) -> String {
    let mut out = format!("{DOCBLOCK_DELIMITER}\n{text}\n{DOCBLOCK_DELIMITER}\n\n{remainder}");
    if !remainder.is_empty() && !remainder.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Replace the docblock of `path` with `text`, or add one if it has none.
///
/// Rewrites the whole file. There is no backup and no protection against a
/// concurrent writer.
pub async fn replace_in_file(path: &Path, text: &str) -> Result<()> {
    let content = read_source(path).await?;
    let extracted = extract(&content);
    let updated = render(text, extracted.remainder);

    tokio::fs::write(path, updated)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Read a source file as UTF-8
pub async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
