//! Ollama-backed capability adapters.
//!
//! A local Ollama server stands in for the host's on-device AI: one model
//! per capability, pulled on demand when configured to.

pub mod capabilities;
pub mod client;
pub mod prompts;

pub use capabilities::{
    OllamaModels, OllamaSummarizerProvider, OllamaTranslatorProvider, OllamaWriterProvider,
    build_registry,
};
pub use client::{OllamaClient, OllamaConfig, OllamaError};
