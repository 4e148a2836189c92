//! Minimal Ollama HTTP client.
//!
//! Covers the three endpoints the capability adapters need:
//! `GET /api/tags`, `POST /api/generate` and a streamed `POST /api/pull`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors raised talking to the Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Could not reach Ollama at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response from Ollama: {0}")]
    InvalidResponse(String),
}

/// Connection settings
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL for Ollama API
    pub base_url: String,
    /// Request timeout (model pulls are not bounded by it)
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Sampling options for `/api/generate`
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SamplingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct PullRequest<'a> {
    model: &'a str,
    stream: bool,
}

/// One line of the streamed pull response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PullStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub completed: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PullStatus {
    /// Downloaded fraction, when the line reports byte counts
    pub fn fraction(&self) -> Option<f64> {
        match (self.completed, self.total) {
            (Some(completed), Some(total)) if total > 0 => {
                Some((completed as f64 / total as f64).clamp(0.0, 1.0))
            }
            _ => None,
        }
    }
}

/// Installed model info
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// Ollama client shared by every capability adapter
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn connection_error(&self, source: reqwest::Error) -> OllamaError {
        if source.is_connect() || source.is_timeout() {
            OllamaError::Connection {
                url: self.config.base_url.clone(),
                source,
            }
        } else {
            OllamaError::Http(source)
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or(body);
        Err(OllamaError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// List installed models
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        let tags: TagsResponse = Self::check_status(response).await?.json().await?;
        debug!("Ollama has {} models installed", tags.models.len());
        Ok(tags.models)
    }

    /// Whether `model` is installed. A name without a tag matches `:latest`.
    pub async fn has_model(&self, model: &str) -> Result<bool> {
        let models = self.list_models().await?;
        Ok(models.iter().any(|m| model_matches(&m.name, model)))
    }

    /// Generate a completion (non-streaming)
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: Option<&str>,
        options: SamplingOptions,
    ) -> Result<String> {
        let request = GenerateRequest {
            model,
            prompt,
            system,
            stream: false,
            options,
        };
        debug!("Generating with {} ({} prompt chars)", model, prompt.len());
        let response = self
            .client
            .post(self.url("/api/generate"))
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        let body: GenerateResponse = Self::check_status(response).await?.json().await?;
        Ok(body.response.trim().to_string())
    }

    /// Pull `model`, calling `on_status` for every progress line.
    pub async fn pull(&self, model: &str, mut on_status: impl FnMut(&PullStatus)) -> Result<()> {
        info!("Pulling Ollama model {}", model);
        let response = self
            .client
            .post(self.url("/api/pull"))
            .json(&PullRequest {
                model,
                stream: true,
            })
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        let mut response = Self::check_status(response).await?;

        let mut buffer: Vec<u8> = Vec::new();
        let mut last = PullStatus::default();
        while let Some(chunk) = response.chunk().await? {
            buffer.extend_from_slice(&chunk);
            while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                if let Some(status) = parse_pull_line(&line)? {
                    on_status(&status);
                    last = status;
                }
            }
        }
        if let Some(status) = parse_pull_line(&buffer)? {
            on_status(&status);
            last = status;
        }

        if last.status == "success" {
            info!("Pulled Ollama model {}", model);
            Ok(())
        } else {
            Err(OllamaError::InvalidResponse(format!(
                "pull of {} ended with status '{}'",
                model, last.status
            )))
        }
    }
}

/// Parse one NDJSON pull line; blank lines yield `None`.
fn parse_pull_line(line: &[u8]) -> Result<Option<PullStatus>> {
    let text = String::from_utf8_lossy(line);
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let status: PullStatus = serde_json::from_str(text)
        .map_err(|e| OllamaError::InvalidResponse(format!("{}: {}", e, text)))?;
    if let Some(error) = &status.error {
        return Err(OllamaError::Api {
            status: 200,
            message: error.clone(),
        });
    }
    Ok(Some(status))
}

fn model_matches(installed: &str, wanted: &str) -> bool {
    installed == wanted || (!wanted.contains(':') && installed == format!("{}:latest", wanted))
}
