//! Application layer for risklens
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalysisSettings;
pub use ports::{
    capability::{
        CapabilityError, CapabilityInstance, CapabilityProvider, CapabilityRegistry, Generator,
        GeneratorProvider, Summarizer, SummarizerProvider, Translator, TranslatorProvider,
    },
    preferences::{PreferenceSource, StaticPreferences},
    progress::DownloadProgressObserver,
    selection::SelectionSource,
};
pub use use_cases::analysis::{AnalysisError, AnalysisOrchestrator, SummarizerHandle};
pub use use_cases::probe_capability::CapabilityProbe;
