//! Domain layer for risklens
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Danger points
//!
//! The risk scoring engine flags eight fixed categories (financial, privacy,
//! service, restriction, subscription, legal protection, legal process,
//! modification) and rates each from 1 to 10. It is a pure function of the
//! input text.
//!
//! ## Capabilities
//!
//! Summarization, translation and generation are opaque capabilities. The
//! domain only knows their identity ([`CapabilityKind`]), readiness
//! ([`CapabilityStatus`]) and call options.

pub mod analysis;
pub mod capability;
pub mod config;
pub mod core;
pub mod prompt;
pub mod risk;

// Re-export commonly used types
pub use analysis::{
    AnalysisRequest, AnalysisResult, DEFAULT_CONTEXT, DangerPoint, MIN_SUMMARY_CHARS,
    PAGE_CONTEXT, SELECTION_CONTEXT, SUMMARY_CONTEXT, Severity, USER_TEXT_CONTEXT, clean_text,
    prepare_for_summary,
};
pub use capability::{
    AUTO_DETECT_LANGUAGE, CapabilityKind, CapabilityStatus, DEFAULT_OUTPUT_LANGUAGE,
    GenerateOptions, SummarizerOptions, SummaryFormat, SummaryLength, SummaryType,
    TARGET_LANGUAGES, TranslateOptions, language_name,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use prompt::PromptTemplate;
pub use risk::{RiskCategory, score_danger_points};
