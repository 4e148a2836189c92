//! Summary preferences from TOML (`[summary]` section)

use risklens_domain::{
    DEFAULT_OUTPUT_LANGUAGE, SummarizerOptions, SummaryFormat, SummaryLength, SummaryType,
};
use serde::{Deserialize, Serialize};

/// Raw summary configuration from TOML
///
/// ```toml
/// [summary]
/// type = "tldr"
/// length = "short"
/// format = "plain-text"
/// output_language = "en"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSummaryConfig {
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
    pub length: SummaryLength,
    pub format: SummaryFormat,
    pub output_language: String,
}

impl Default for FileSummaryConfig {
    fn default() -> Self {
        Self {
            summary_type: SummaryType::default(),
            length: SummaryLength::default(),
            format: SummaryFormat::default(),
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
        }
    }
}

impl FileSummaryConfig {
    pub fn to_summarizer_options(&self) -> SummarizerOptions {
        SummarizerOptions {
            summary_type: self.summary_type,
            length: self.length,
            format: self.format,
            output_language: self.output_language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_summarizer_defaults() {
        assert_eq!(
            FileSummaryConfig::default().to_summarizer_options(),
            SummarizerOptions::default()
        );
    }

    #[test]
    fn test_deserialize_summary_section() {
        let toml_str = r#"
[summary]
type = "headline"
length = "long"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let options = config.summary.to_summarizer_options();
        assert_eq!(options.summary_type, SummaryType::Headline);
        assert_eq!(options.length, SummaryLength::Long);
        assert_eq!(options.format, SummaryFormat::Markdown);
    }

    #[test]
    fn test_unknown_summary_type_is_rejected() {
        let toml_str = r#"
[summary]
type = "essay"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
