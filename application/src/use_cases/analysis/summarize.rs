//! Single-stage summarization.

use super::{AnalysisError, AnalysisOrchestrator, SummarizerHandle, release};
use crate::ports::capability::Summarizer;
use risklens_domain::{CapabilityKind, CapabilityStatus, SummarizerOptions, prepare_for_summary};
use tracing::{info, warn};

const KIND: CapabilityKind = CapabilityKind::Summarize;

impl AnalysisOrchestrator {
    /// Summarize `text` with the stored preferences.
    ///
    /// Validation happens before any capability is touched, so short text
    /// fails with `TextTooShort` without creating an instance.
    pub async fn summarize_only(&self, text: &str, context: &str) -> Result<String, AnalysisError> {
        let options = self.preferences.summarizer_options();
        self.summarize_with_options(text, context, options).await
    }

    /// Summarize `text` with explicit options, using an instance scoped to
    /// this call.
    pub async fn summarize_with_options(
        &self,
        text: &str,
        context: &str,
        options: SummarizerOptions,
    ) -> Result<String, AnalysisError> {
        let cleaned = prepare_for_summary(text)?;
        let status = self.probe.probe(KIND).await;
        self.summarize_after_probe(&cleaned, context, &options, status)
            .await
    }

    /// Summarize already-cleaned text once availability is known.
    pub(super) async fn summarize_after_probe(
        &self,
        cleaned: &str,
        context: &str,
        options: &SummarizerOptions,
        status: CapabilityStatus,
    ) -> Result<String, AnalysisError> {
        let summarizer = self.create_after_probe(status, options).await?;

        info!("Summarizing {} characters", cleaned.chars().count());
        let outcome = summarizer.summarize(cleaned, context).await;
        release(KIND, summarizer);
        outcome.map_err(AnalysisError::downstream(KIND))
    }

    /// Summarize through a caller-owned handle.
    ///
    /// The instance held by `handle` is reused while the options stay the
    /// same. A failed call destroys it and leaves the handle empty, so the
    /// next call starts fresh. A closed handle is rejected.
    pub async fn summarize_with_handle(
        &self,
        handle: &mut SummarizerHandle,
        text: &str,
        context: &str,
        options: SummarizerOptions,
    ) -> Result<String, AnalysisError> {
        if handle.is_closed() {
            return Err(AnalysisError::InstanceDestroyed(KIND));
        }
        let cleaned = prepare_for_summary(text)?;

        if handle.live(&options).is_none() {
            handle.reset();
            let summarizer = self.create_summarizer(&options).await?;
            handle.install(summarizer, options.clone());
        }
        let Some(summarizer) = handle.live(&options) else {
            return Err(AnalysisError::InstanceDestroyed(KIND));
        };

        let outcome = summarizer.summarize(&cleaned, context).await;
        if outcome.is_err() {
            handle.reset();
        }
        outcome.map_err(AnalysisError::downstream(KIND))
    }

    /// Probe, then create a summarizer instance.
    pub(super) async fn create_summarizer(
        &self,
        options: &SummarizerOptions,
    ) -> Result<Box<dyn Summarizer>, AnalysisError> {
        let status = self.probe.probe(KIND).await;
        self.create_after_probe(status, options).await
    }

    /// Create a summarizer instance from an availability answer the caller
    /// already holds.
    async fn create_after_probe(
        &self,
        status: CapabilityStatus,
        options: &SummarizerOptions,
    ) -> Result<Box<dyn Summarizer>, AnalysisError> {
        let Some(provider) = self.capabilities.summarizer() else {
            return Err(AnalysisError::CapabilityUnavailable(KIND));
        };
        if !status.is_usable() {
            warn!("Summarizer model is not available");
            return Err(AnalysisError::ModelUnavailableOnDevice(KIND));
        }
        if status == CapabilityStatus::NeedsSetup {
            info!("Summarizer model needs to be downloaded before first use");
        }
        provider
            .create(options, self.progress.clone())
            .await
            .map_err(AnalysisError::downstream(KIND))
    }
}
