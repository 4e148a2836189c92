//! Message shapes exchanged between execution contexts.
//!
//! # Protocol Overview
//!
//! - **Requests**: a closed union tagged by `action`
//!   (`summarizeText`, `analyzeText`, `answerQuery`, `testAvailability`,
//!   `getSelectedText`). The older `getSummary` and `testSummarizer` names are
//!   accepted as aliases.
//! - **Responses**: `{success: true, <result field>}` or
//!   `{success: false, error}`.
//! - **Envelopes**: the line-oriented server wraps both in `{id, ...}` so a
//!   client can match each response to its request.

use risklens_application::AnalysisError;
use risklens_domain::{AnalysisResult, SummarizerOptions, SummaryFormat, SummaryLength, SummaryType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The execution contexts that exchange messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextId {
    /// Privileged context that owns the AI capabilities
    Coordinator,
    /// Context embedded in the page; owns the selection
    Page,
    /// User-facing control panel
    ControlSurface,
}

impl ContextId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextId::Coordinator => "coordinator",
            ContextId::Page => "page",
            ContextId::ControlSurface => "control-surface",
        }
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-request summary options; unset fields fall back to preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOverrides {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub summary_type: Option<SummaryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<SummaryLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SummaryFormat>,
}

impl SummaryOverrides {
    pub fn apply(&self, mut base: SummarizerOptions) -> SummarizerOptions {
        if let Some(summary_type) = self.summary_type {
            base.summary_type = summary_type;
        }
        if let Some(length) = self.length {
            base.length = length;
        }
        if let Some(format) = self.format {
            base.format = format;
        }
        base
    }
}

/// A request sent to another context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    #[serde(alias = "getSummary")]
    SummarizeText {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<SummaryOverrides>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<String>,
    },
    AnalyzeText {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    AnswerQuery {
        #[serde(default)]
        question: String,
        #[serde(default)]
        context: String,
        #[serde(default)]
        original_text: String,
    },
    #[serde(alias = "testSummarizer")]
    TestAvailability,
    GetSelectedText,
}

impl Request {
    /// Wire name of the action
    pub fn action(&self) -> &'static str {
        match self {
            Request::SummarizeText { .. } => "summarizeText",
            Request::AnalyzeText { .. } => "analyzeText",
            Request::AnswerQuery { .. } => "answerQuery",
            Request::TestAvailability => "testAvailability",
            Request::GetSelectedText => "getSelectedText",
        }
    }

    pub fn summarize(text: impl Into<String>) -> Self {
        Request::SummarizeText {
            text: text.into(),
            options: None,
            context: None,
        }
    }

    pub fn analyze(text: impl Into<String>, context: impl Into<String>) -> Self {
        Request::AnalyzeText {
            text: text.into(),
            context: Some(context.into()),
        }
    }
}

/// The single response to a [`Request`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            success: true,
            summary: Some(summary.into()),
            ..Default::default()
        }
    }

    pub fn analysis(analysis: AnalysisResult) -> Self {
        Self {
            success: true,
            analysis: Some(analysis),
            ..Default::default()
        }
    }

    pub fn answer(answer: impl Into<String>) -> Self {
        Self {
            success: true,
            answer: Some(answer.into()),
            ..Default::default()
        }
    }

    pub fn available(available: bool) -> Self {
        Self {
            success: true,
            available: Some(available),
            ..Default::default()
        }
    }

    pub fn selected_text(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl From<AnalysisError> for Response {
    fn from(error: AnalysisError) -> Self {
        Response::failure(error.to_string())
    }
}

/// An inbound line on the stdio server
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub id: Option<u64>,
    /// Destination context; the coordinator when omitted
    #[serde(default)]
    pub to: Option<ContextId>,
    pub request: Request,
}

/// An outbound line on the stdio server
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub response: Response,
}
