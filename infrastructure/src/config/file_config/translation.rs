//! Translation configuration from TOML (`[translation]` section)

use risklens_domain::TARGET_LANGUAGES;
use serde::{Deserialize, Serialize};

/// Raw translation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranslationConfig {
    /// Run the translation stage during analysis
    pub enabled: bool,
    /// Target language codes, in attempt order
    pub target_languages: Vec<String>,
}

impl Default for FileTranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_languages: TARGET_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
