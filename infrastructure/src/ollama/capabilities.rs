//! Capability adapters backed by Ollama models.
//!
//! Each capability is bound to one model name. Availability maps the
//! installed-model list onto the host status vocabulary:
//!
//! | Model installed | `pull_missing` | Status         |
//! |-----------------|----------------|----------------|
//! | yes             | -              | `readily`      |
//! | no              | true           | `downloadable` |
//! | no              | false          | `unavailable`  |

use super::client::{OllamaClient, OllamaError, SamplingOptions};
use super::prompts::{summarize_prompt, summarizer_system, translator_system};
use async_trait::async_trait;
use risklens_application::{
    CapabilityError, CapabilityInstance, CapabilityProvider, CapabilityRegistry,
    DownloadProgressObserver, Generator, GeneratorProvider, Summarizer, SummarizerProvider,
    Translator, TranslatorProvider,
};
use risklens_domain::{
    CapabilityKind, GenerateOptions, SummarizerOptions, TranslateOptions,
};
use std::sync::Arc;
use tracing::{debug, info};

impl From<OllamaError> for CapabilityError {
    fn from(error: OllamaError) -> Self {
        match error {
            OllamaError::Connection { .. } => CapabilityError::ConnectionError(error.to_string()),
            other => CapabilityError::OperationFailed(other.to_string()),
        }
    }
}

/// Model names per capability; `None` leaves the capability absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OllamaModels {
    pub summarize: Option<String>,
    pub translate: Option<String>,
    pub generate: Option<String>,
    /// Pull a missing model on first `create` instead of reporting it unavailable
    pub pull_missing: bool,
}

/// Build a registry with one adapter per configured model.
pub fn build_registry(client: Arc<OllamaClient>, models: &OllamaModels) -> CapabilityRegistry {
    let binding = |kind, model: &String| ModelBinding {
        client: Arc::clone(&client),
        kind,
        model: model.clone(),
        pull_missing: models.pull_missing,
    };

    let mut registry = CapabilityRegistry::new();
    if let Some(model) = &models.summarize {
        registry = registry.with_summarizer(Arc::new(OllamaSummarizerProvider(binding(
            CapabilityKind::Summarize,
            model,
        ))));
    }
    if let Some(model) = &models.translate {
        registry = registry.with_translator(Arc::new(OllamaTranslatorProvider(binding(
            CapabilityKind::Translate,
            model,
        ))));
    }
    if let Some(model) = &models.generate {
        registry = registry.with_generator(Arc::new(OllamaWriterProvider(binding(
            CapabilityKind::Generate,
            model,
        ))));
    }
    debug!("Capability registry: {:?}", registry);
    registry
}

/// A capability bound to one model on one server
struct ModelBinding {
    client: Arc<OllamaClient>,
    kind: CapabilityKind,
    model: String,
    pull_missing: bool,
}

impl ModelBinding {
    async fn availability(&self) -> Result<String, CapabilityError> {
        let installed = self.client.has_model(&self.model).await?;
        let status = match (installed, self.pull_missing) {
            (true, _) => "readily",
            (false, true) => "downloadable",
            (false, false) => "unavailable",
        };
        debug!("{} model {}: {}", self.kind.api_name(), self.model, status);
        Ok(status.to_string())
    }

    /// Make sure the model is installed, pulling it when allowed.
    async fn ensure_model(
        &self,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<(), CapabilityError> {
        if self.client.has_model(&self.model).await? {
            return Ok(());
        }
        if !self.pull_missing {
            return Err(CapabilityError::ModelUnavailable(self.model.clone()));
        }

        let kind = self.kind;
        info!("Downloading {} model {}", kind.api_name(), self.model);
        self.client
            .pull(&self.model, |status| {
                if let (Some(observer), Some(fraction)) = (&progress, status.fraction()) {
                    observer.on_download_progress(kind, fraction);
                }
            })
            .await
            .map_err(|e| CapabilityError::CreateFailed {
                kind,
                message: e.to_string(),
            })?;
        if let Some(observer) = &progress {
            observer.on_download_complete(kind);
        }
        Ok(())
    }

    fn session(&self) -> ModelSession {
        ModelSession {
            client: Arc::clone(&self.client),
            kind: self.kind,
            model: self.model.clone(),
        }
    }
}

/// State shared by every created instance
struct ModelSession {
    client: Arc<OllamaClient>,
    kind: CapabilityKind,
    model: String,
}

impl ModelSession {
    fn release(&self) -> Result<(), CapabilityError> {
        debug!("Released {} session on {}", self.kind.api_name(), self.model);
        Ok(())
    }
}

// ==================== Summarizer ====================

pub struct OllamaSummarizerProvider(ModelBinding);

#[async_trait]
impl CapabilityProvider for OllamaSummarizerProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Summarize
    }

    async fn availability(&self, _output_language: &str) -> Result<String, CapabilityError> {
        self.0.availability().await
    }
}

#[async_trait]
impl SummarizerProvider for OllamaSummarizerProvider {
    async fn create(
        &self,
        options: &SummarizerOptions,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Summarizer>, CapabilityError> {
        self.0.ensure_model(progress).await?;
        Ok(Box::new(OllamaSummarizer {
            session: self.0.session(),
            system: summarizer_system(options),
        }))
    }
}

struct OllamaSummarizer {
    session: ModelSession,
    system: String,
}

impl CapabilityInstance for OllamaSummarizer {
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError> {
        self.session.release()
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn summarize(&self, text: &str, context: &str) -> Result<String, CapabilityError> {
        let summary = self
            .session
            .client
            .generate(
                &self.session.model,
                &summarize_prompt(text, context),
                Some(&self.system),
                SamplingOptions::default(),
            )
            .await?;
        Ok(summary)
    }
}

// ==================== Translator ====================

pub struct OllamaTranslatorProvider(ModelBinding);

#[async_trait]
impl CapabilityProvider for OllamaTranslatorProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Translate
    }

    async fn availability(&self, _output_language: &str) -> Result<String, CapabilityError> {
        self.0.availability().await
    }
}

#[async_trait]
impl TranslatorProvider for OllamaTranslatorProvider {
    async fn create(
        &self,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Translator>, CapabilityError> {
        self.0.ensure_model(progress).await?;
        Ok(Box::new(OllamaTranslator {
            session: self.0.session(),
        }))
    }
}

struct OllamaTranslator {
    session: ModelSession,
}

impl CapabilityInstance for OllamaTranslator {
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError> {
        self.session.release()
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<String, CapabilityError> {
        let translated = self
            .session
            .client
            .generate(
                &self.session.model,
                text,
                Some(&translator_system(options)),
                SamplingOptions {
                    temperature: Some(0.0),
                    num_predict: None,
                },
            )
            .await?;
        Ok(translated)
    }
}

// ==================== Writer ====================

pub struct OllamaWriterProvider(ModelBinding);

#[async_trait]
impl CapabilityProvider for OllamaWriterProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Generate
    }

    async fn availability(&self, _output_language: &str) -> Result<String, CapabilityError> {
        self.0.availability().await
    }
}

#[async_trait]
impl GeneratorProvider for OllamaWriterProvider {
    async fn create(
        &self,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Generator>, CapabilityError> {
        self.0.ensure_model(progress).await?;
        Ok(Box::new(OllamaWriter {
            session: self.0.session(),
        }))
    }
}

struct OllamaWriter {
    session: ModelSession,
}

impl CapabilityInstance for OllamaWriter {
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError> {
        self.session.release()
    }
}

#[async_trait]
impl Generator for OllamaWriter {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, CapabilityError> {
        let text = self
            .session
            .client
            .generate(
                &self.session.model,
                prompt,
                None,
                SamplingOptions {
                    temperature: Some(options.temperature),
                    num_predict: Some(options.max_length),
                },
            )
            .await?;
        Ok(text)
    }
}
