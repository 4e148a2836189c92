//! Follow-up query configuration from TOML (`[query]` section)

use risklens_domain::GenerateOptions;
use serde::{Deserialize, Serialize};

/// Raw query configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    pub max_length: u32,
    pub temperature: f32,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        let defaults = GenerateOptions::default();
        Self {
            max_length: defaults.max_length,
            temperature: defaults.temperature,
        }
    }
}

impl FileQueryConfig {
    pub fn to_generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_length: self.max_length,
            temperature: self.temperature,
        }
    }
}
