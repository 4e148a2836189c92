//! Console output formatter for analysis results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use risklens_domain::{
    AnalysisResult, CapabilityKind, CapabilityStatus, DangerPoint, Severity, language_name,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete analysis
    pub fn format_analysis(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Text Analysis"));
        output.push('\n');

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&result.summary);
        output.push('\n');

        output.push_str(&Self::section_header("Danger Points"));
        if result.danger_points.is_empty() {
            output.push_str(&format!("{}\n", "No danger points detected.".green()));
        }
        for point in &result.danger_points {
            output.push_str(&Self::danger_point(point));
        }

        if !result.translations.is_empty() {
            output.push_str(&Self::section_header("Translations"));
            for (code, text) in &result.translations {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", language_name(code)).yellow().bold(),
                    text
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Analyzed:".dimmed(),
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&Self::footer());

        output
    }

    fn danger_point(point: &DangerPoint) -> String {
        let rating = format!("{:>2}/10", point.rating());
        let mut line = format!(
            "\n{} {}  {}\n  {}\n",
            Self::paint(&rating, point.severity()),
            point.title().name().bold(),
            format!("[{}]", point.severity()).dimmed(),
            point.description()
        );
        if !point.matches().is_empty() {
            line.push_str(&format!(
                "  {} {}\n",
                "Found:".dimmed(),
                point.matches().join(", ")
            ));
        }
        line
    }

    /// Color a string by danger class
    pub fn paint(text: &str, severity: Severity) -> ColoredString {
        match severity {
            Severity::Critical => text.red().bold(),
            Severity::High => text.red(),
            Severity::Medium => text.yellow(),
            Severity::Low => text.green(),
        }
    }

    pub fn format_summary(summary: &str) -> String {
        format!("{}\n\n{}\n", "=== Summary ===".cyan().bold(), summary)
    }

    pub fn format_answer(question: &str, answer: &str) -> String {
        format!("{} {}\n\n{}\n", "Q:".bold(), question, answer)
    }

    pub fn format_probe(statuses: &[(CapabilityKind, CapabilityStatus)]) -> String {
        let mut output = format!("{}\n", "Capabilities:".cyan().bold());
        for (kind, status) in statuses {
            let label = match status {
                CapabilityStatus::Ready => status.as_str().green(),
                CapabilityStatus::NeedsSetup | CapabilityStatus::Unknown => {
                    status.as_str().yellow()
                }
                CapabilityStatus::Unavailable => status.as_str().red(),
            };
            output.push_str(&format!("  {:<12} {}\n", kind.api_name(), label));
        }
        output
    }

    pub fn format_error(error: &str) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String {
        Self::format_analysis(result)
    }

    fn format_summary(&self, summary: &str) -> String {
        Self::format_summary(summary)
    }

    fn format_answer(&self, question: &str, answer: &str) -> String {
        Self::format_answer(question, answer)
    }

    fn format_probe(&self, statuses: &[(CapabilityKind, CapabilityStatus)]) -> String {
        Self::format_probe(statuses)
    }

    fn format_error(&self, error: &str) -> String {
        Self::format_error(error)
    }
}
