//! Context endpoints: a listener loop around a [`RequestHandler`].

use crate::transport::bus::{Delivery, MessageBus};
use crate::transport::error::Result;
use crate::transport::protocol::{ContextId, Request, Response};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Answers the requests delivered to one context
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: Request) -> Response;
}

/// Register `handler` as the listener for `context` and serve it until
/// `cancel` fires.
///
/// Requests are handled one at a time, in arrival order. Each one is
/// answered exactly once, after its handler settles.
pub fn spawn_endpoint(
    bus: &Arc<MessageBus>,
    context: ContextId,
    handler: Arc<dyn RequestHandler>,
    cancel: CancellationToken,
) -> Result<JoinHandle<()>> {
    let mut inbox = bus.listen(context)?;

    Ok(tokio::spawn(async move {
        loop {
            let delivery = tokio::select! {
                _ = cancel.cancelled() => break,
                delivery = inbox.recv() => match delivery {
                    Some(delivery) => delivery,
                    None => break,
                },
            };

            let Delivery { request, responder } = delivery;
            debug!("{} handling {} (id={})", context, request.action(), responder.id());
            let response = handler.handle(request).await;
            responder.respond(response);
        }
        debug!("{} endpoint stopped", context);
    }))
}
