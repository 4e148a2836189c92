//! Error types for the message transport

use crate::transport::protocol::ContextId;
use thiserror::Error;

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur when passing messages between contexts
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Could not establish connection: no {0} listener is registered")]
    Unreachable(ContextId),

    #[error("A {0} listener is already registered")]
    AlreadyListening(ContextId),

    #[error("Response channel closed before a response arrived")]
    ChannelClosed,

    #[error("Request {0} has already been resolved")]
    AlreadyResolved(u64),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, TransportError::Unreachable(_))
    }
}
