//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No text provided")]
    EmptyText,

    #[error("Text is too short to summarize ({length} characters, at least {minimum} required)")]
    TextTooShort { length: usize, minimum: usize },
}

impl DomainError {
    /// Check if this error is a length validation failure
    pub fn is_text_too_short(&self) -> bool {
        matches!(self, DomainError::TextTooShort { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_too_short_display() {
        let error = DomainError::TextTooShort {
            length: 12,
            minimum: 50,
        };
        assert_eq!(
            error.to_string(),
            "Text is too short to summarize (12 characters, at least 50 required)"
        );
    }

    #[test]
    fn test_is_text_too_short_check() {
        assert!(
            DomainError::TextTooShort {
                length: 0,
                minimum: 50
            }
            .is_text_too_short()
        );
        assert!(!DomainError::EmptyText.is_text_too_short());
    }
}
