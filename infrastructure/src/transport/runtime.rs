//! Wires the three contexts onto one bus.

use crate::transport::bus::MessageBus;
use crate::transport::endpoint::spawn_endpoint;
use crate::transport::error::Result;
use crate::transport::handlers::{ControlSurfaceHandler, CoordinatorHandler, PageHandler};
use crate::transport::protocol::ContextId;
use risklens_application::{AnalysisOrchestrator, SelectionSource};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Running coordinator, page and control-surface endpoints
pub struct TransportRuntime {
    bus: Arc<MessageBus>,
    cancel: CancellationToken,
    endpoints: Vec<JoinHandle<()>>,
}

impl TransportRuntime {
    /// Start every context. Without a `selection` source no page listener
    /// is registered, as on a page where nothing was injected.
    pub fn start(
        orchestrator: Arc<AnalysisOrchestrator>,
        selection: Option<Arc<dyn SelectionSource>>,
    ) -> Result<Self> {
        let bus = MessageBus::new();
        let cancel = CancellationToken::new();
        let mut endpoints = Vec::with_capacity(3);

        endpoints.push(spawn_endpoint(
            &bus,
            ContextId::Coordinator,
            Arc::new(CoordinatorHandler::new(orchestrator)),
            cancel.clone(),
        )?);
        if let Some(selection) = selection {
            endpoints.push(spawn_endpoint(
                &bus,
                ContextId::Page,
                Arc::new(PageHandler::new(bus.clone(), selection)),
                cancel.clone(),
            )?);
        }
        endpoints.push(spawn_endpoint(
            &bus,
            ContextId::ControlSurface,
            Arc::new(ControlSurfaceHandler::new(bus.clone())),
            cancel.clone(),
        )?);

        debug!("Transport runtime started with {} contexts", endpoints.len());
        Ok(Self {
            bus,
            cancel,
            endpoints,
        })
    }

    pub fn bus(&self) -> &Arc<MessageBus> {
        &self.bus
    }

    /// Stop every endpoint and wait for them to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        for endpoint in self.endpoints {
            if let Err(e) = endpoint.await {
                warn!("Endpoint task ended abnormally: {}", e);
            }
        }
    }
}
