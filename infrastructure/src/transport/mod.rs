//! Message passing between execution contexts.
//!
//! The coordinator owns the capabilities, the page context owns the
//! selection, and the control surface relays user commands. They share no
//! state; every interaction is a [`Request`] answered by exactly one
//! [`Response`] through the [`MessageBus`].

pub mod bus;
pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod pending;
pub mod protocol;
pub mod runtime;
pub mod stdio;

pub use bus::MessageBus;
pub use endpoint::{RequestHandler, spawn_endpoint};
pub use error::TransportError;
pub use handlers::{ControlSurfaceHandler, CoordinatorHandler, PageHandler};
pub use menu::{MenuDispatcher, MenuOutcome};
pub use pending::PendingRequests;
pub use protocol::{ContextId, Request, Response, SummaryOverrides};
pub use runtime::TransportRuntime;
pub use stdio::serve_lines;
