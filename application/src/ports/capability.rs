//! Capability ports
//!
//! Each AI capability follows the same two-phase contract:
//!
//! ```text
//! provider.availability() ──▶ status string (no instance created)
//! provider.create(options) ──▶ instance ──▶ operate ... ──▶ destroy (exactly once)
//! ```
//!
//! `destroy` consumes the instance, so a destroyed instance cannot be used
//! again. Implementations (adapters) live in the infrastructure layer; the
//! [`CapabilityRegistry`] is how the application layer finds them.

use crate::ports::progress::DownloadProgressObserver;
use async_trait::async_trait;
use risklens_domain::{
    CapabilityKind, GenerateOptions, SummarizerOptions, TranslateOptions,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by capability providers and instances
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("{0} capability is not available")]
    Unavailable(CapabilityKind),

    #[error("Model '{0}' is not available on this device")]
    ModelUnavailable(String),

    #[error("Failed to create {kind} instance: {message}")]
    CreateFailed {
        kind: CapabilityKind,
        message: String,
    },

    #[error("{0}")]
    OperationFailed(String),

    #[error("{0} instance has already been destroyed")]
    InstanceDestroyed(CapabilityKind),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Availability signal shared by every capability provider
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Which capability this provider backs
    fn kind(&self) -> CapabilityKind;

    /// Query the host availability status string (e.g. "readily").
    ///
    /// Must not create an instance.
    async fn availability(&self, output_language: &str) -> Result<String, CapabilityError>;
}

/// A created capability instance
pub trait CapabilityInstance: Send + Sync {
    /// Release the instance. Consumes it, so it can only happen once.
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError>;
}

/// Creates summarizer instances
#[async_trait]
pub trait SummarizerProvider: CapabilityProvider {
    async fn create(
        &self,
        options: &SummarizerOptions,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Summarizer>, CapabilityError>;
}

#[async_trait]
pub trait Summarizer: CapabilityInstance {
    async fn summarize(&self, text: &str, context: &str) -> Result<String, CapabilityError>;
}

/// Creates translator instances
#[async_trait]
pub trait TranslatorProvider: CapabilityProvider {
    async fn create(
        &self,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Translator>, CapabilityError>;
}

#[async_trait]
pub trait Translator: CapabilityInstance {
    async fn translate(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<String, CapabilityError>;
}

/// Creates generator (writer) instances
#[async_trait]
pub trait GeneratorProvider: CapabilityProvider {
    async fn create(
        &self,
        progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Generator>, CapabilityError>;
}

#[async_trait]
pub trait Generator: CapabilityInstance {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, CapabilityError>;
}

/// Resolves the capabilities present in the current execution context.
///
/// A capability that was never registered is structurally absent; the
/// orchestrator never inspects the host environment directly.
#[derive(Default, Clone)]
pub struct CapabilityRegistry {
    summarizer: Option<Arc<dyn SummarizerProvider>>,
    translator: Option<Arc<dyn TranslatorProvider>>,
    generator: Option<Arc<dyn GeneratorProvider>>,
}

impl CapabilityRegistry {
    /// An empty registry: every capability is absent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summarizer(mut self, provider: Arc<dyn SummarizerProvider>) -> Self {
        self.summarizer = Some(provider);
        self
    }

    pub fn with_translator(mut self, provider: Arc<dyn TranslatorProvider>) -> Self {
        self.translator = Some(provider);
        self
    }

    pub fn with_generator(mut self, provider: Arc<dyn GeneratorProvider>) -> Self {
        self.generator = Some(provider);
        self
    }

    pub fn summarizer(&self) -> Option<&Arc<dyn SummarizerProvider>> {
        self.summarizer.as_ref()
    }

    pub fn translator(&self) -> Option<&Arc<dyn TranslatorProvider>> {
        self.translator.as_ref()
    }

    pub fn generator(&self) -> Option<&Arc<dyn GeneratorProvider>> {
        self.generator.as_ref()
    }

    /// Whether a provider is registered for `kind`
    pub fn is_present(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Summarize => self.summarizer.is_some(),
            CapabilityKind::Translate => self.translator.is_some(),
            CapabilityKind::Generate => self.generator.is_some(),
        }
    }

    /// Query the availability signal for `kind`.
    ///
    /// Returns `None` when the capability is absent (nothing is called).
    pub async fn availability(
        &self,
        kind: CapabilityKind,
        output_language: &str,
    ) -> Option<Result<String, CapabilityError>> {
        match kind {
            CapabilityKind::Summarize => match &self.summarizer {
                Some(p) => Some(p.availability(output_language).await),
                None => None,
            },
            CapabilityKind::Translate => match &self.translator {
                Some(p) => Some(p.availability(output_language).await),
                None => None,
            },
            CapabilityKind::Generate => match &self.generator {
                Some(p) => Some(p.availability(output_language).await),
                None => None,
            },
        }
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("summarizer", &self.summarizer.is_some())
            .field("translator", &self.translator.is_some())
            .field("generator", &self.generator.is_some())
            .finish()
    }
}
