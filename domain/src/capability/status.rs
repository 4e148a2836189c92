//! Capability identity and readiness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of AI capabilities the analysis pipeline can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    Summarize,
    Translate,
    Generate,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 3] = [
        CapabilityKind::Summarize,
        CapabilityKind::Translate,
        CapabilityKind::Generate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::Summarize => "summarize",
            CapabilityKind::Translate => "translate",
            CapabilityKind::Generate => "generate",
        }
    }

    /// Name of the host-side API backing this capability
    pub fn api_name(&self) -> &'static str {
        match self {
            CapabilityKind::Summarize => "Summarizer",
            CapabilityKind::Translate => "Translator",
            CapabilityKind::Generate => "Writer",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CapabilityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summarize" | "summarizer" => Ok(CapabilityKind::Summarize),
            "translate" | "translator" => Ok(CapabilityKind::Translate),
            "generate" | "writer" => Ok(CapabilityKind::Generate),
            _ => Err(format!("Invalid capability: {}", s)),
        }
    }
}

/// Readiness tier of a capability (transient, never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityStatus {
    /// Usable right now
    Ready,
    /// Usable once a model download completes
    NeedsSetup,
    /// Absent, or present but unusable on this device
    Unavailable,
    /// Reported a status outside the known vocabulary
    Unknown,
}

impl CapabilityStatus {
    /// Map a host availability string to a readiness tier.
    ///
    /// Unrecognized strings map to [`CapabilityStatus::Unknown`], which is
    /// treated as usable.
    pub fn from_availability(status: &str) -> Self {
        match status.trim() {
            "unavailable" | "no" => CapabilityStatus::Unavailable,
            "readily" | "available" => CapabilityStatus::Ready,
            "downloadable" | "downloading" | "after-download" => CapabilityStatus::NeedsSetup,
            _ => CapabilityStatus::Unknown,
        }
    }

    /// Whether an instance may be created
    pub fn is_usable(&self) -> bool {
        !matches!(self, CapabilityStatus::Unavailable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityStatus::Ready => "ready",
            CapabilityStatus::NeedsSetup => "needs-setup",
            CapabilityStatus::Unavailable => "unavailable",
            CapabilityStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CapabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
