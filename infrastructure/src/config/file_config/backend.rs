//! Capability backend configuration from TOML (`[backend]` section)

use crate::ollama::{OllamaConfig, OllamaModels};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
///
/// Each `*_model` names the Ollama model backing one capability. Leaving a
/// model unset makes that capability absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub base_url: String,
    pub summarize_model: Option<String>,
    pub translate_model: Option<String>,
    pub generate_model: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Pull missing models instead of reporting them unavailable
    pub pull_missing: bool,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: OllamaConfig::default().base_url,
            summarize_model: None,
            translate_model: None,
            generate_model: None,
            timeout_seconds: 120,
            pull_missing: false,
        }
    }
}

impl FileBackendConfig {
    pub fn to_ollama_config(&self) -> OllamaConfig {
        OllamaConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub fn to_models(&self) -> OllamaModels {
        OllamaModels {
            summarize: self.summarize_model.clone(),
            translate: self.translate_model.clone(),
            generate: self.generate_model.clone(),
            pull_missing: self.pull_missing,
        }
    }

    /// Whether any capability has a model configured
    pub fn has_models(&self) -> bool {
        self.summarize_model.is_some()
            || self.translate_model.is_some()
            || self.generate_model.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults() {
        let config = FileBackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout_seconds, 120);
        assert!(!config.pull_missing);
        assert!(!config.has_models());
    }

    #[test]
    fn test_backend_conversion() {
        let toml_str = r#"
[backend]
base_url = "http://gpu-box:11434"
summarize_model = "llama3.2"
generate_model = "qwen2.5"
timeout_seconds = 30
pull_missing = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();

        let ollama = config.backend.to_ollama_config();
        assert_eq!(ollama.base_url, "http://gpu-box:11434");
        assert_eq!(ollama.timeout, Duration::from_secs(30));

        let models = config.backend.to_models();
        assert_eq!(models.summarize.as_deref(), Some("llama3.2"));
        assert_eq!(models.translate, None);
        assert_eq!(models.generate.as_deref(), Some("qwen2.5"));
        assert!(models.pull_missing);
    }
}
