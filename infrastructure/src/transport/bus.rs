//! In-process message bus between execution contexts.
//!
//! Each context registers one listener and receives [`Delivery`] values on
//! its [`Inbox`]. A sender awaits the matching response through the
//! [`PendingRequests`] registry. Contexts share nothing else.
//!
//! ```text
//! send(to, request) ──▶ register id ──▶ routes[to] ──▶ Inbox::recv
//!        ▲                                                   │
//!        └────────── pending[id] ◀── Responder::respond ◀────┘
//! ```

use crate::transport::error::{Result, TransportError};
use crate::transport::pending::PendingRequests;
use crate::transport::protocol::{ContextId, Request, Response};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Sent when a handler goes away without answering.
const DROPPED_RESPONSE: &str = "The receiving context closed before responding";

/// A request handed to a context, with the means to answer it once
#[derive(Debug)]
pub struct Delivery {
    pub request: Request,
    pub responder: Responder,
}

/// Resolves one pending request.
///
/// `respond` consumes the responder. If it is dropped unanswered, a failure
/// response is delivered instead so the sender never waits forever.
#[derive(Debug)]
pub struct Responder {
    id: u64,
    pending: Arc<PendingRequests>,
    answered: bool,
}

impl Responder {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn respond(mut self, response: Response) {
        self.answered = true;
        if let Err(e) = self.pending.resolve(self.id, response) {
            warn!("Dropping response: {}", e);
        }
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if !self.answered {
            let _ = self
                .pending
                .resolve(self.id, Response::failure(DROPPED_RESPONSE));
        }
    }
}

/// Receiving end for one context. Dropping it deregisters the context.
pub struct Inbox {
    rx: mpsc::UnboundedReceiver<Delivery>,
    context: ContextId,
    bus: Arc<MessageBus>,
}

impl Inbox {
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Wait for the next delivery.
    pub async fn recv(&mut self) -> Option<Delivery> {
        self.rx.recv().await
    }
}

impl Drop for Inbox {
    fn drop(&mut self) {
        self.bus.deregister(self.context);
    }
}

/// Routes requests to the listener registered for each context
#[derive(Debug, Default)]
pub struct MessageBus {
    routes: RwLock<HashMap<ContextId, mpsc::UnboundedSender<Delivery>>>,
    pending: Arc<PendingRequests>,
}

impl MessageBus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register the listener for `context`.
    pub fn listen(self: &Arc<Self>, context: ContextId) -> Result<Inbox> {
        let mut routes = self.routes.write().unwrap_or_else(|e| e.into_inner());
        if routes.contains_key(&context) {
            return Err(TransportError::AlreadyListening(context));
        }
        let (tx, rx) = mpsc::unbounded_channel();
        routes.insert(context, tx);
        debug!("Bus: registered {} listener", context);
        Ok(Inbox {
            rx,
            context,
            bus: Arc::clone(self),
        })
    }

    pub fn is_listening(&self, context: ContextId) -> bool {
        let routes = self.routes.read().unwrap_or_else(|e| e.into_inner());
        routes.contains_key(&context)
    }

    /// Send `request` to `to` and wait for its single response.
    ///
    /// Fails with [`TransportError::Unreachable`] when no listener is
    /// registered for `to`.
    pub async fn send(&self, to: ContextId, request: Request) -> Result<Response> {
        let (id, rx) = self.pending.register();
        let action = request.action();
        let delivery = Delivery {
            request,
            responder: Responder {
                id,
                pending: Arc::clone(&self.pending),
                answered: false,
            },
        };

        let delivered = {
            let routes = self.routes.read().unwrap_or_else(|e| e.into_inner());
            match routes.get(&to) {
                Some(tx) => tx.send(delivery).is_ok(),
                None => false,
            }
        };
        if !delivered {
            self.pending.cancel(id);
            debug!("Bus: {} has no listener for {}", to, action);
            return Err(TransportError::Unreachable(to));
        }

        debug!("Bus: sent {} (id={}) to {}", action, id, to);
        rx.await.map_err(|_| TransportError::ChannelClosed)
    }

    /// Requests sent but not yet answered
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn deregister(&self, context: ContextId) {
        let mut routes = self.routes.write().unwrap_or_else(|e| e.into_inner());
        if routes.remove(&context).is_some() {
            debug!("Bus: deregistered {} listener", context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_to_missing_listener_is_unreachable() {
        let bus = MessageBus::new();

        let err = bus
            .send(ContextId::Page, Request::GetSelectedText)
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Unreachable(ContextId::Page)));
        assert!(err.is_unreachable());
        assert_eq!(bus.pending_count(), 0);
    }

    #[tokio::test]
    async fn response_reaches_sender() {
        let bus = MessageBus::new();
        let mut inbox = bus.listen(ContextId::Page).unwrap();

        let server = tokio::spawn(async move {
            let delivery = inbox.recv().await.unwrap();
            assert_eq!(delivery.request, Request::GetSelectedText);
            delivery.responder.respond(Response::selected_text("hello"));
            inbox
        });

        let response = bus
            .send(ContextId::Page, Request::GetSelectedText)
            .await
            .unwrap();
        assert_eq!(response.text.as_deref(), Some("hello"));
        assert_eq!(bus.pending_count(), 0);
        drop(server.await.unwrap());
    }

    #[tokio::test]
    async fn dropped_responder_still_answers_once() {
        let bus = MessageBus::new();
        let mut inbox = bus.listen(ContextId::Coordinator).unwrap();

        let server = tokio::spawn(async move {
            let delivery = inbox.recv().await.unwrap();
            drop(delivery);
            inbox
        });

        let response = bus
            .send(ContextId::Coordinator, Request::TestAvailability)
            .await
            .unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some(DROPPED_RESPONSE));
        drop(server.await.unwrap());
    }

    #[tokio::test]
    async fn dropping_inbox_deregisters() {
        let bus = MessageBus::new();
        let inbox = bus.listen(ContextId::ControlSurface).unwrap();
        assert!(bus.is_listening(ContextId::ControlSurface));
        assert!(matches!(
            bus.listen(ContextId::ControlSurface),
            Err(TransportError::AlreadyListening(_))
        ));

        drop(inbox);

        assert!(!bus.is_listening(ContextId::ControlSurface));
        assert!(bus.listen(ContextId::ControlSurface).is_ok());
    }
}
