//! Text normalization applied before summarization

use crate::core::error::DomainError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of characters (after cleaning) a text needs to be summarized.
pub const MIN_SUMMARY_CHARS: usize = 50;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Strip markup tags, collapse whitespace runs into single spaces and trim.
///
/// Tags are replaced by a space rather than removed so that words on either
/// side of a tag do not run together.
pub fn clean_text(text: &str) -> String {
    let without_tags = MARKUP_TAG.replace_all(text, " ");
    WHITESPACE_RUN
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Clean `text` and check it is long enough to summarize.
///
/// Returns the cleaned text on success. Length is measured in characters.
pub fn prepare_for_summary(text: &str) -> Result<String, DomainError> {
    let cleaned = clean_text(text);
    let length = cleaned.chars().count();
    if length < MIN_SUMMARY_CHARS {
        return Err(DomainError::TextTooShort {
            length,
            minimum: MIN_SUMMARY_CHARS,
        });
    }
    Ok(cleaned)
}
