//! Analysis request value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Provenance hint used when the caller does not supply one.
pub const DEFAULT_CONTEXT: &str = "General text analysis";

/// Provenance hint for a summary request that does not supply one.
pub const SUMMARY_CONTEXT: &str = "General text summarization";

/// Provenance hint for the extracted text of a whole page.
pub const PAGE_CONTEXT: &str = "Article or webpage content";

/// Provenance hint for text typed or piped in by the user.
pub const USER_TEXT_CONTEXT: &str = "User provided text";

/// Provenance hint attached to text selected inside a page.
pub const SELECTION_CONTEXT: &str = "Selected text from webpage";

/// A piece of text submitted for analysis (Value Object)
///
/// Immutable once built. `text` is guaranteed non-empty (not just
/// whitespace); `context` describes where the text came from and is passed
/// through to the summarizer and the query prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    text: String,
    context: String,
}

impl AnalysisRequest {
    /// Create a new request, rejecting empty text
    pub fn new(text: impl Into<String>, context: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText);
        }
        let context = context.into();
        let context = if context.trim().is_empty() {
            DEFAULT_CONTEXT.to_string()
        } else {
            context
        };
        Ok(Self { text, context })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let req = AnalysisRequest::new("Some terms", "Selected text").unwrap();
        assert_eq!(req.text(), "Some terms");
        assert_eq!(req.context(), "Selected text");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(
            AnalysisRequest::new("   ", "ctx").unwrap_err(),
            DomainError::EmptyText
        );
    }

    #[test]
    fn test_blank_context_defaults() {
        let req = AnalysisRequest::new("text", "").unwrap();
        assert_eq!(req.context(), DEFAULT_CONTEXT);
    }
}
