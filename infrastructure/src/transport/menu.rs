//! Context-menu dispatch with a control-surface fallback.

use crate::transport::bus::MessageBus;
use crate::transport::protocol::{ContextId, Request, Response};
use risklens_domain::PAGE_CONTEXT;
use std::sync::Arc;
use tracing::{error, info};

/// What happened to a menu command
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
    /// Nothing to do (empty selection)
    Ignored,
    /// Answered by the intended context
    Delivered(Response),
    /// Intended context unreachable; answered by the control surface
    Fallback(Response),
    /// No context could be reached
    Undeliverable,
}

/// Turns menu commands into transport requests
pub struct MenuDispatcher {
    bus: Arc<MessageBus>,
}

impl MenuDispatcher {
    pub fn new(bus: Arc<MessageBus>) -> Self {
        Self { bus }
    }

    /// "Summarize selection": ask the page context, falling back to the
    /// control surface when the page has no listener.
    pub async fn summarize_selection(&self, selection: &str) -> MenuOutcome {
        if selection.trim().is_empty() {
            info!("No text selected");
            return MenuOutcome::Ignored;
        }

        match self
            .bus
            .send(ContextId::Page, Request::summarize(selection))
            .await
        {
            Ok(response) => MenuOutcome::Delivered(response),
            Err(e) => {
                if e.is_unreachable() {
                    info!("Page context has no listener, opening control surface");
                } else {
                    error!("Failed to send message to page context: {}", e);
                }
                match self
                    .bus
                    .send(ContextId::ControlSurface, Request::summarize(selection))
                    .await
                {
                    Ok(response) => MenuOutcome::Fallback(response),
                    Err(e) => {
                        error!("Failed to open control surface: {}", e);
                        MenuOutcome::Undeliverable
                    }
                }
            }
        }
    }

    /// "Summarize page": handled by the control surface.
    pub async fn summarize_page(&self, page_text: &str) -> MenuOutcome {
        let request = Request::SummarizeText {
            text: page_text.to_string(),
            options: None,
            context: Some(PAGE_CONTEXT.to_string()),
        };
        match self.bus.send(ContextId::ControlSurface, request).await {
            Ok(response) => MenuOutcome::Delivered(response),
            Err(e) => {
                error!("Failed to open control surface: {}", e);
                MenuOutcome::Undeliverable
            }
        }
    }
}
