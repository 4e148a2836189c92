//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod output;
mod query;
mod summary;
mod translation;

pub use backend::FileBackendConfig;
pub use output::FileOutputConfig;
pub use query::FileQueryConfig;
pub use summary::FileSummaryConfig;
pub use translation::FileTranslationConfig;

use risklens_application::AnalysisSettings;
use risklens_domain::language_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Summary preferences
    pub summary: FileSummaryConfig,
    /// Translation stage settings
    pub translation: FileTranslationConfig,
    /// Follow-up query generation settings
    pub query: FileQueryConfig,
    /// Capability backend
    pub backend: FileBackendConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// A problem found while validating the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending key, e.g. `query.temperature`
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Settings for the analysis orchestrator
    pub fn to_analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings::default()
            .with_output_language(self.summary.output_language.clone())
            .with_translation(self.translation.enabled)
            .with_target_languages(self.translation.target_languages.clone())
            .with_query_options(self.query.to_generate_options())
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// None of these are fatal; the caller decides whether to warn or abort.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.summary.output_language.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "summary.output_language".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        for code in &self.translation.target_languages {
            if code == &self.summary.output_language {
                issues.push(ConfigIssue {
                    field: "translation.target_languages".to_string(),
                    message: format!("'{}' is also the output language", code),
                });
            } else if language_name(code) == code.to_uppercase() {
                issues.push(ConfigIssue {
                    field: "translation.target_languages".to_string(),
                    message: format!("unknown language code '{}'", code),
                });
            }
        }

        if !(0.0..=2.0).contains(&self.query.temperature) {
            issues.push(ConfigIssue {
                field: "query.temperature".to_string(),
                message: format!("{} is outside 0.0..=2.0", self.query.temperature),
            });
        }
        if self.query.max_length == 0 {
            issues.push(ConfigIssue {
                field: "query.max_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if !self.backend.has_models() {
            issues.push(ConfigIssue {
                field: "backend".to_string(),
                message: "no models configured; every capability is unavailable".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risklens_domain::{OutputFormat, SummaryType};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[summary]
type = "tldr"
length = "short"
format = "plain-text"

[translation]
enabled = false
target_languages = ["fr", "de"]

[query]
max_length = 200
temperature = 0.2

[backend]
summarize_model = "llama3.2"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.summary.summary_type, SummaryType::Tldr);
        assert!(!config.translation.enabled);
        assert_eq!(config.translation.target_languages, vec!["fr", "de"]);
        assert_eq!(config.query.max_length, 200);
        assert_eq!(config.backend.summarize_model.as_deref(), Some("llama3.2"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[query]
temperature = 0.1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.query.temperature, 0.1);
        assert_eq!(config.query.max_length, 500);
        assert!(config.translation.enabled);
        assert_eq!(config.translation.target_languages.len(), 11);
        assert!(config.output.color);
    }

    #[test]
    fn test_to_analysis_settings() {
        let mut config = FileConfig::default();
        config.translation.enabled = false;
        config.translation.target_languages = vec!["ja".to_string()];
        config.query.max_length = 64;

        let settings = config.to_analysis_settings();
        assert_eq!(settings.output_language, "en");
        assert!(!settings.translate);
        assert_eq!(settings.target_languages, vec!["ja"]);
        assert_eq!(settings.query.max_length, 64);
    }

    #[test]
    fn test_validate_default_config_only_flags_missing_models() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "backend");
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let mut config = FileConfig::default();
        config.backend.summarize_model = Some("llama3.2".to_string());
        config.translation.target_languages = vec!["en".to_string(), "xx".to_string()];
        config.query.temperature = 3.5;
        config.query.max_length = 0;

        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "translation.target_languages",
                "translation.target_languages",
                "query.temperature",
                "query.max_length",
            ]
        );
    }
}
