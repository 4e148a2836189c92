//! Summary preference port
//!
//! The user's preferred summary type, length and format are persisted by an
//! external store. The core only reads them.

use risklens_domain::SummarizerOptions;

/// Read-only access to summarizer preferences
pub trait PreferenceSource: Send + Sync {
    /// Summarizer options built from the stored `summaryType`,
    /// `summaryLength` and `summaryFormat` values
    fn summarizer_options(&self) -> SummarizerOptions;
}

/// Fixed preferences, typically loaded from configuration at startup
#[derive(Debug, Clone, Default)]
pub struct StaticPreferences {
    options: SummarizerOptions,
}

impl StaticPreferences {
    pub fn new(options: SummarizerOptions) -> Self {
        Self { options }
    }
}

impl PreferenceSource for StaticPreferences {
    fn summarizer_options(&self) -> SummarizerOptions {
        self.options.clone()
    }
}
