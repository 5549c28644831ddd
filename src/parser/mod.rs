//! Restricted extractor for the editor's file-nesting settings
//!
//! This is deliberately not a JSON parser. It finds one object by key name and
//! reads the flat `"key": "value"` members inside it:
//!
//! - `//` line comments are stripped everywhere, including inside strings
//! - escaped quotes inside keys or values are not supported
//! - nested objects, arrays, numbers and booleans are ignored

mod token;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

pub use token::{Span, Token, TokenKind, Tokenizer, balanced_span};

use crate::error::{GenerateError, MalformedKind};

/// Name of the settings member holding the nesting patterns
pub const PATTERNS_KEY: &str = "explorer.fileNesting.patterns";

/// Parent glob → comma-separated child glob list
pub type PatternMap = HashMap<String, String>;

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("valid comment regex"));

static PATTERNS_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    let key = regex::escape(PATTERNS_KEY);
    Regex::new(&format!(r#""{key}"\s*:\s*\{{"#)).expect("valid key regex")
});

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"\s*:\s*"([^"]*)""#).expect("valid entry regex"));

/// Remove `//` comments through end of line, keeping the line breaks
#[must_use]
pub fn strip_line_comments(text: &str) -> String {
    LINE_COMMENT.replace_all(text, "").into_owned()
}

/// Byte offset of the `{` that opens the patterns object
pub fn locate_patterns_object(text: &str) -> Result<usize, GenerateError> {
    PATTERNS_OPEN
        .find(text)
        .map(|m| m.end() - 1)
        .ok_or(GenerateError::MalformedConfig(MalformedKind::MissingKey))
}

/// Span of the balanced object opened at `open`
pub fn object_span(text: &str, open: usize) -> Result<Span, GenerateError> {
    balanced_span(text, open)
        .ok_or(GenerateError::MalformedConfig(MalformedKind::Unterminated { open }))
}

/// Read every flat string member of an object body
///
/// A key seen twice keeps its last value.
#[must_use]
pub fn parse_entries(object: &str) -> PatternMap {
    ENTRY
        .captures_iter(object)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extract the nesting patterns from raw settings text
pub fn extract_patterns(text: &str) -> Result<PatternMap, GenerateError> {
    let stripped = strip_line_comments(text);
    let open = locate_patterns_object(&stripped)?;
    let span = object_span(&stripped, open)?;
    log::debug!("patterns object spans bytes {}..{}", span.start, span.end);

    let entries = parse_entries(span.slice(&stripped));
    log::debug!("extracted {} pattern entries", entries.len());
    Ok(entries)
}
