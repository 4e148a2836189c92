//! Probe Capability use case.
//!
//! Reports whether a capability can be used without creating an instance.
//!
//! | Registry          | Availability call | Status                          |
//! |-------------------|-------------------|---------------------------------|
//! | absent            | not made          | `Unavailable`                   |
//! | present           | error             | `Unavailable` (logged)          |
//! | present           | status string     | `CapabilityStatus::from_availability` |

use crate::ports::capability::CapabilityRegistry;
use risklens_domain::{CapabilityKind, CapabilityStatus};
use std::sync::Arc;
use tracing::{debug, warn};

/// Probes capabilities through the injected [`CapabilityRegistry`].
#[derive(Debug, Clone)]
pub struct CapabilityProbe {
    registry: Arc<CapabilityRegistry>,
    output_language: String,
}

impl CapabilityProbe {
    pub fn new(registry: Arc<CapabilityRegistry>, output_language: impl Into<String>) -> Self {
        Self {
            registry,
            output_language: output_language.into(),
        }
    }

    /// Probe a single capability. Never fails.
    pub async fn probe(&self, kind: CapabilityKind) -> CapabilityStatus {
        match self.registry.availability(kind, &self.output_language).await {
            None => {
                debug!("{} API not present in this context", kind.api_name());
                CapabilityStatus::Unavailable
            }
            Some(Err(e)) => {
                warn!("Error checking {} availability: {}", kind.api_name(), e);
                CapabilityStatus::Unavailable
            }
            Some(Ok(raw)) => {
                let status = CapabilityStatus::from_availability(&raw);
                if status == CapabilityStatus::Unknown {
                    warn!(
                        "{} reported unrecognized availability '{}', treating it as usable",
                        kind.api_name(),
                        raw
                    );
                } else {
                    debug!("{} availability: {} ({})", kind.api_name(), raw, status);
                }
                status
            }
        }
    }

    /// Probe every capability, in [`CapabilityKind::ALL`] order.
    pub async fn probe_all(&self) -> Vec<(CapabilityKind, CapabilityStatus)> {
        let mut statuses = Vec::with_capacity(CapabilityKind::ALL.len());
        for kind in CapabilityKind::ALL {
            statuses.push((kind, self.probe(kind).await));
        }
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::analysis::test_support::{FakeSummarizerProvider, Script};

    fn probe_with(provider: FakeSummarizerProvider) -> CapabilityProbe {
        let registry = CapabilityRegistry::new().with_summarizer(Arc::new(provider));
        CapabilityProbe::new(Arc::new(registry), "en")
    }

    #[tokio::test]
    async fn test_absent_capability_is_unavailable() {
        let probe = CapabilityProbe::new(Arc::new(CapabilityRegistry::new()), "en");
        for kind in CapabilityKind::ALL {
            assert_eq!(probe.probe(kind).await, CapabilityStatus::Unavailable);
        }
    }

    #[tokio::test]
    async fn test_status_strings_map_to_status() {
        let cases = [
            ("readily", CapabilityStatus::Ready),
            ("downloadable", CapabilityStatus::NeedsSetup),
            ("after-download", CapabilityStatus::NeedsSetup),
            ("no", CapabilityStatus::Unavailable),
            ("something-new", CapabilityStatus::Unknown),
        ];
        for (raw, expected) in cases {
            let provider = FakeSummarizerProvider::new(Script::default().availability(raw));
            assert_eq!(
                probe_with(provider).probe(CapabilityKind::Summarize).await,
                expected,
                "availability {raw}"
            );
        }
    }

    #[tokio::test]
    async fn test_availability_error_is_unavailable() {
        let provider = FakeSummarizerProvider::new(Script::default().availability_error());
        let probe = probe_with(provider);
        assert_eq!(
            probe.probe(CapabilityKind::Summarize).await,
            CapabilityStatus::Unavailable
        );
    }

    #[tokio::test]
    async fn test_probe_never_creates_an_instance() {
        let provider = Arc::new(FakeSummarizerProvider::new(Script::default()));
        let registry = CapabilityRegistry::new().with_summarizer(provider.clone());
        let probe = CapabilityProbe::new(Arc::new(registry), "en");

        let statuses = probe.probe_all().await;

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0], (CapabilityKind::Summarize, CapabilityStatus::Ready));
        assert_eq!(statuses[1].1, CapabilityStatus::Unavailable);
        assert_eq!(provider.counters().created(), 0);
    }
}
