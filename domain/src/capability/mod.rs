//! Capability identity, readiness tiers and call options

pub mod options;
pub mod status;

pub use options::{
    AUTO_DETECT_LANGUAGE, DEFAULT_OUTPUT_LANGUAGE, GenerateOptions, SummarizerOptions,
    SummaryFormat, SummaryLength, SummaryType, TARGET_LANGUAGES, TranslateOptions, language_name,
};
pub use status::{CapabilityKind, CapabilityStatus};
