//! Caller-owned summarizer handle.
//!
//! For embedding callers that summarize repeatedly with one instance; the
//! CLI and the transport use per-call instances instead.

use super::release;
use crate::ports::capability::{CapabilityError, Summarizer};
use risklens_domain::{CapabilityKind, SummarizerOptions};

enum HandleState {
    Empty,
    Live {
        summarizer: Box<dyn Summarizer>,
        options: SummarizerOptions,
    },
    Closed,
}

/// Lets a caller opt in to reusing one summarizer instance across calls.
///
/// The handle owns at most one instance. It is destroyed when the options
/// change, when a call through it fails, on [`close`](Self::close), or when
/// the handle is dropped. A closed handle cannot be used again.
pub struct SummarizerHandle {
    state: HandleState,
}

impl SummarizerHandle {
    pub fn new() -> Self {
        Self {
            state: HandleState::Empty,
        }
    }

    /// Whether an instance is currently held
    pub fn is_live(&self) -> bool {
        matches!(self.state, HandleState::Live { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, HandleState::Closed)
    }

    /// Destroy the held instance, if any, and close the handle.
    ///
    /// Closing an already closed handle is an error.
    pub fn close(&mut self) -> Result<(), CapabilityError> {
        match std::mem::replace(&mut self.state, HandleState::Closed) {
            HandleState::Empty => Ok(()),
            HandleState::Live { summarizer, .. } => summarizer.destroy(),
            HandleState::Closed => Err(CapabilityError::InstanceDestroyed(
                CapabilityKind::Summarize,
            )),
        }
    }

    /// The held instance, if it was created with `options`
    pub(super) fn live(&self, options: &SummarizerOptions) -> Option<&dyn Summarizer> {
        match &self.state {
            HandleState::Live {
                summarizer,
                options: held,
            } if held == options => Some(summarizer.as_ref()),
            _ => None,
        }
    }

    pub(super) fn install(&mut self, summarizer: Box<dyn Summarizer>, options: SummarizerOptions) {
        self.reset();
        self.state = HandleState::Live {
            summarizer,
            options,
        };
    }

    /// Destroy the held instance and return to empty. No-op when closed.
    pub(super) fn reset(&mut self) {
        if self.is_closed() {
            return;
        }
        if let HandleState::Live { summarizer, .. } =
            std::mem::replace(&mut self.state, HandleState::Empty)
        {
            release(CapabilityKind::Summarize, summarizer);
        }
    }
}

impl Default for SummarizerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SummarizerHandle {
    fn drop(&mut self) {
        self.reset();
    }
}

impl std::fmt::Debug for SummarizerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            HandleState::Empty => "empty",
            HandleState::Live { .. } => "live",
            HandleState::Closed => "closed",
        };
        f.debug_struct("SummarizerHandle")
            .field("state", &state)
            .finish()
    }
}
