//! Error types for the analysis use cases.

use crate::ports::capability::CapabilityError;
use risklens_domain::{CapabilityKind, DomainError};
use thiserror::Error;

/// Failures surfaced by the single-stage operations.
///
/// The composite pipeline never returns these; it turns each one into a
/// placeholder or an omission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Empty or too-short input
    #[error(transparent)]
    InvalidText(#[from] DomainError),

    #[error("{} API not available in this context", .0.api_name())]
    CapabilityUnavailable(CapabilityKind),

    #[error("{} model is not available on this device", .0.api_name())]
    ModelUnavailableOnDevice(CapabilityKind),

    #[error("{source}")]
    DownstreamFailure {
        kind: CapabilityKind,
        source: CapabilityError,
    },

    #[error("{} handle was used after it was destroyed", .0.api_name())]
    InstanceDestroyed(CapabilityKind),
}

impl AnalysisError {
    pub(crate) fn downstream(kind: CapabilityKind) -> impl FnOnce(CapabilityError) -> Self {
        move |source| AnalysisError::DownstreamFailure { kind, source }
    }

    pub fn is_text_too_short(&self) -> bool {
        matches!(self, AnalysisError::InvalidText(e) if e.is_text_too_short())
    }

    /// Absent or unusable capability
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            AnalysisError::CapabilityUnavailable(_) | AnalysisError::ModelUnavailableOnDevice(_)
        )
    }
}
