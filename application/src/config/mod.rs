//! Application-level configuration.
//!
//! - [`AnalysisSettings`]: which stages run and with what parameters

pub mod analysis_settings;

pub use analysis_settings::AnalysisSettings;
