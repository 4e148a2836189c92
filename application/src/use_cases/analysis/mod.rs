//! Analysis use cases
//!
//! The [`AnalysisOrchestrator`] exposes three modes over the injected
//! capabilities:
//!
//! | Mode                 | Failure policy                                  |
//! |----------------------|-------------------------------------------------|
//! | `summarize_only`     | propagates [`AnalysisError`]                    |
//! | `analyze`            | never fails; each stage degrades its own field  |
//! | `answer_query`       | never fails; fallback or apology string         |
//!
//! Every capability instance created here is destroyed exactly once, on
//! every exit path. Destruction failures are logged and swallowed.

mod handle;
mod pipeline;
mod query;
mod summarize;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use handle::SummarizerHandle;
pub use types::AnalysisError;

use crate::config::AnalysisSettings;
use crate::ports::capability::{CapabilityInstance, CapabilityRegistry};
use crate::ports::preferences::{PreferenceSource, StaticPreferences};
use crate::ports::progress::DownloadProgressObserver;
use crate::use_cases::probe_capability::CapabilityProbe;
use risklens_domain::CapabilityKind;
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs summarization, risk scoring, translation and query answering.
pub struct AnalysisOrchestrator {
    capabilities: Arc<CapabilityRegistry>,
    probe: CapabilityProbe,
    preferences: Arc<dyn PreferenceSource>,
    settings: AnalysisSettings,
    progress: Option<Arc<dyn DownloadProgressObserver>>,
}

impl Clone for AnalysisOrchestrator {
    fn clone(&self) -> Self {
        Self {
            capabilities: self.capabilities.clone(),
            probe: self.probe.clone(),
            preferences: self.preferences.clone(),
            settings: self.settings.clone(),
            progress: self.progress.clone(),
        }
    }
}

impl AnalysisOrchestrator {
    pub fn new(capabilities: Arc<CapabilityRegistry>, settings: AnalysisSettings) -> Self {
        let probe = CapabilityProbe::new(capabilities.clone(), settings.output_language.clone());
        Self {
            capabilities,
            probe,
            preferences: Arc::new(StaticPreferences::default()),
            settings,
            progress: None,
        }
    }

    /// Read summarizer options from a preference store.
    pub fn with_preferences(mut self, preferences: Arc<dyn PreferenceSource>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Report model downloads triggered by `create`.
    pub fn with_progress(mut self, progress: Arc<dyn DownloadProgressObserver>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn probe(&self) -> &CapabilityProbe {
        &self.probe
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn preferences(&self) -> &Arc<dyn PreferenceSource> {
        &self.preferences
    }
}

/// Destroy a capability instance, logging instead of propagating failure.
pub(crate) fn release<I>(kind: CapabilityKind, instance: Box<I>)
where
    I: CapabilityInstance + ?Sized,
{
    match instance.destroy() {
        Ok(()) => debug!("{} instance destroyed", kind.api_name()),
        Err(e) => warn!("Failed to destroy {} instance: {}", kind.api_name(), e),
    }
}
