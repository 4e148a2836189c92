//! Pending-request registry.
//!
//! Every request sent over the bus gets an id and a oneshot slot. The slot
//! is removed on first resolution, so a second attempt finds nothing and
//! fails with [`TransportError::AlreadyResolved`].

use crate::transport::error::{Result, TransportError};
use crate::transport::protocol::Response;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::oneshot;
use tracing::debug;

/// Maps request ids to the slot awaiting their response
#[derive(Debug)]
pub struct PendingRequests {
    next_id: AtomicU64,
    slots: RwLock<HashMap<u64, oneshot::Sender<Response>>>,
}

impl Default for PendingRequests {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingRequests {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Allocate an id and the receiver its response will arrive on.
    pub fn register(&self) -> (u64, oneshot::Receiver<Response>) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(id, tx);
        (id, rx)
    }

    /// Deliver the response for `id`. Succeeds at most once per id.
    pub fn resolve(&self, id: u64, response: Response) -> Result<()> {
        let sender = {
            let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
            slots.remove(&id)
        };
        let Some(tx) = sender else {
            return Err(TransportError::AlreadyResolved(id));
        };
        if tx.send(response).is_err() {
            debug!("Requester for {} went away before its response arrived", id);
        }
        Ok(())
    }

    /// Drop the slot for `id` without responding. Returns whether it existed.
    pub fn cancel(&self, id: u64) -> bool {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.remove(&id).is_some()
    }

    /// Number of requests still awaiting a response
    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_exactly_once() {
        let pending = PendingRequests::new();
        let (id, rx) = pending.register();

        pending.resolve(id, Response::summary("first")).unwrap();
        let second = pending.resolve(id, Response::summary("second"));

        assert!(matches!(second, Err(TransportError::AlreadyResolved(i)) if i == id));
        assert_eq!(rx.await.unwrap(), Response::summary("first"));
        assert!(pending.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let pending = PendingRequests::new();
        let (a, _rx_a) = pending.register();
        let (b, _rx_b) = pending.register();
        assert_ne!(a, b);
        assert_eq!(pending.len(), 2);
    }

    #[tokio::test]
    async fn cancel_closes_the_receiver() {
        let pending = PendingRequests::new();
        let (id, rx) = pending.register();

        assert!(pending.cancel(id));
        assert!(!pending.cancel(id));
        assert!(rx.await.is_err());
    }

    #[test]
    fn resolving_after_requester_left_is_not_an_error() {
        let pending = PendingRequests::new();
        let (id, rx) = pending.register();
        drop(rx);
        assert!(pending.resolve(id, Response::answer("late")).is_ok());
    }
}
