//! Infrastructure layer for risklens
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the transport between execution contexts,
//! Ollama-backed capabilities, page text extraction and configuration
//! file loading.

pub mod config;
pub mod ollama;
pub mod page;
pub mod transport;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig};
pub use ollama::{OllamaClient, OllamaConfig, OllamaError, OllamaModels, build_registry};
pub use page::{InMemorySelection, PageTextExtractor};
pub use transport::{
    ContextId, MenuDispatcher, MenuOutcome, MessageBus, Request, Response, SummaryOverrides,
    TransportError, TransportRuntime, serve_lines,
};
