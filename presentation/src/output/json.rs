//! JSON output for scripting

use crate::output::formatter::OutputFormatter;
use risklens_domain::{AnalysisResult, CapabilityKind, CapabilityStatus};
use serde_json::{Map, Value, json};

/// Formats results as pretty-printed JSON in the wire field names
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String {
        match serde_json::to_value(result) {
            Ok(value) => Self::render(value),
            Err(e) => Self::render(json!({ "success": false, "error": e.to_string() })),
        }
    }

    fn format_summary(&self, summary: &str) -> String {
        Self::render(json!({ "success": true, "summary": summary }))
    }

    fn format_answer(&self, question: &str, answer: &str) -> String {
        Self::render(json!({ "question": question, "answer": answer }))
    }

    fn format_probe(&self, statuses: &[(CapabilityKind, CapabilityStatus)]) -> String {
        let map: Map<String, Value> = statuses
            .iter()
            .map(|(kind, status)| (kind.as_str().to_string(), json!(status.as_str())))
            .collect();
        Self::render(Value::Object(map))
    }

    fn format_error(&self, error: &str) -> String {
        Self::render(json!({ "success": false, "error": error }))
    }
}
