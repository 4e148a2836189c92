//! Output formatter trait

use risklens_domain::{AnalysisResult, CapabilityKind, CapabilityStatus};

/// Renders command results for the terminal or for machines
pub trait OutputFormatter {
    /// Format a complete analysis
    fn format_analysis(&self, result: &AnalysisResult) -> String;

    /// Format a bare summary
    fn format_summary(&self, summary: &str) -> String;

    /// Format the answer to a follow-up question
    fn format_answer(&self, question: &str, answer: &str) -> String;

    /// Format capability readiness
    fn format_probe(&self, statuses: &[(CapabilityKind, CapabilityStatus)]) -> String;

    /// Format a failure reported by the coordinator
    fn format_error(&self, error: &str) -> String;
}
