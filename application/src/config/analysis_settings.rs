//! Analysis settings: which pipeline stages run and how
//!
//! [`AnalysisSettings`] groups the static parameters that control the
//! analysis pipeline in
//! [`AnalysisOrchestrator`](crate::use_cases::analysis::AnalysisOrchestrator).
//! Summary type, length and format are not here; they come from the
//! [`PreferenceSource`](crate::ports::preferences::PreferenceSource).

use risklens_domain::{DEFAULT_OUTPUT_LANGUAGE, GenerateOptions, TARGET_LANGUAGES};
use serde::{Deserialize, Serialize};

/// Pipeline control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Output language passed to availability queries.
    pub output_language: String,
    /// Whether the translation stage runs at all.
    pub translate: bool,
    /// Languages attempted by the translation stage, in order.
    pub target_languages: Vec<String>,
    /// Options for query answering.
    pub query: GenerateOptions,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
            translate: true,
            target_languages: TARGET_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            query: GenerateOptions::default(),
        }
    }
}

impl AnalysisSettings {
    // ==================== Builder Methods ====================

    pub fn with_output_language(mut self, language: impl Into<String>) -> Self {
        self.output_language = language.into();
        self
    }

    pub fn with_translation(mut self, enabled: bool) -> Self {
        self.translate = enabled;
        self
    }

    pub fn with_target_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_query_options(mut self, options: GenerateOptions) -> Self {
        self.query = options;
        self
    }
}
