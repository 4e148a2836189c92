//! Request handlers for each execution context.
//!
//! | Context          | Serves                                                      |
//! |------------------|-------------------------------------------------------------|
//! | coordinator      | summarize, analyze, answer, availability                    |
//! | page             | selected text; summarize by forwarding an analysis request |
//! | control surface  | forwards to the coordinator, or to the page for selection   |

use crate::transport::bus::MessageBus;
use crate::transport::endpoint::RequestHandler;
use crate::transport::protocol::{ContextId, Request, Response};
use async_trait::async_trait;
use risklens_application::{AnalysisOrchestrator, SelectionSource};
use risklens_domain::{
    AnalysisRequest, CapabilityKind, DomainError, MIN_SUMMARY_CHARS, SELECTION_CONTEXT,
    SUMMARY_CONTEXT,
};
use std::sync::Arc;
use tracing::{error, info};

/// Error sent back for an action a context does not serve
fn unsupported(context: ContextId, request: &Request) -> Response {
    Response::failure(format!(
        "Action {} is not handled by the {} context",
        request.action(),
        context
    ))
}

/// Owns the orchestrator; the only context that touches capabilities
pub struct CoordinatorHandler {
    orchestrator: Arc<AnalysisOrchestrator>,
}

impl CoordinatorHandler {
    pub fn new(orchestrator: Arc<AnalysisOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl RequestHandler for CoordinatorHandler {
    async fn handle(&self, request: Request) -> Response {
        match request {
            Request::SummarizeText {
                text,
                options,
                context,
            } => {
                if text.trim().is_empty() {
                    return Response::failure(DomainError::EmptyText.to_string());
                }
                let base = self.orchestrator.preferences().summarizer_options();
                let options = options.unwrap_or_default().apply(base);
                let context = context.unwrap_or_else(|| SUMMARY_CONTEXT.to_string());
                match self
                    .orchestrator
                    .summarize_with_options(&text, &context, options)
                    .await
                {
                    Ok(summary) => Response::summary(summary),
                    Err(e) => {
                        error!("Summarization request failed: {}", e);
                        e.into()
                    }
                }
            }
            Request::AnalyzeText { text, context } => {
                match AnalysisRequest::new(text, context.unwrap_or_default()) {
                    Ok(request) => Response::analysis(self.orchestrator.analyze(&request).await),
                    Err(e) => Response::failure(e.to_string()),
                }
            }
            Request::AnswerQuery {
                question,
                context,
                original_text,
            } => {
                if question.trim().is_empty() {
                    return Response::failure("No question provided");
                }
                Response::answer(
                    self.orchestrator
                        .answer_query(&question, &context, &original_text)
                        .await,
                )
            }
            Request::TestAvailability => {
                let status = self.orchestrator.probe().probe(CapabilityKind::Summarize).await;
                Response::available(status.is_usable())
            }
            other @ Request::GetSelectedText => unsupported(ContextId::Coordinator, &other),
        }
    }
}

/// Runs inside the page: owns the selection, has no capabilities
pub struct PageHandler {
    bus: Arc<MessageBus>,
    selection: Arc<dyn SelectionSource>,
}

impl PageHandler {
    pub fn new(bus: Arc<MessageBus>, selection: Arc<dyn SelectionSource>) -> Self {
        Self { bus, selection }
    }
}

#[async_trait]
impl RequestHandler for PageHandler {
    async fn handle(&self, request: Request) -> Response {
        match request {
            Request::GetSelectedText => Response::selected_text(self.selection.selected_text()),
            Request::SummarizeText { text, .. } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Response::failure(DomainError::EmptyText.to_string());
                }
                if trimmed.chars().count() < MIN_SUMMARY_CHARS {
                    return Response::failure(format!(
                        "Text is too short to summarize effectively. Please select at least {} characters.",
                        MIN_SUMMARY_CHARS
                    ));
                }
                info!("Page: analyzing {} selected characters", trimmed.chars().count());
                match self
                    .bus
                    .send(ContextId::Coordinator, Request::analyze(text, SELECTION_CONTEXT))
                    .await
                {
                    Ok(response) => response,
                    Err(e) => {
                        error!("Page: analysis request failed: {}", e);
                        Response::failure(e.to_string())
                    }
                }
            }
            other => unsupported(ContextId::Page, &other),
        }
    }
}

/// The control panel: relays requests to whichever context serves them
pub struct ControlSurfaceHandler {
    bus: Arc<MessageBus>,
}

impl ControlSurfaceHandler {
    pub fn new(bus: Arc<MessageBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl RequestHandler for ControlSurfaceHandler {
    async fn handle(&self, request: Request) -> Response {
        let to = match request {
            Request::GetSelectedText => ContextId::Page,
            _ => ContextId::Coordinator,
        };
        match self.bus.send(to, request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Control surface: {}", e);
                Response::failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::endpoint::spawn_endpoint;
    use risklens_application::{AnalysisSettings, CapabilityRegistry};
    use risklens_domain::PromptTemplate;
    use tokio_util::sync::CancellationToken;

    const TERMS: &str = "We may share your personal data with partners, collect usage information, \
        and access your files to monitor and track your activity.";

    struct FixedSelection(&'static str);

    impl SelectionSource for FixedSelection {
        fn selected_text(&self) -> String {
            self.0.to_string()
        }
    }

    fn coordinator() -> CoordinatorHandler {
        let orchestrator = AnalysisOrchestrator::new(
            Arc::new(CapabilityRegistry::new()),
            AnalysisSettings::default(),
        );
        CoordinatorHandler::new(Arc::new(orchestrator))
    }

    #[tokio::test]
    async fn coordinator_analyzes_without_capabilities() {
        let response = coordinator().handle(Request::analyze(TERMS, "test")).await;

        assert!(response.success);
        let analysis = response.analysis.unwrap();
        assert_eq!(analysis.summary, PromptTemplate::SUMMARY_UNAVAILABLE);
        assert_eq!(analysis.danger_points[0].rating(), 10);
    }

    #[tokio::test]
    async fn coordinator_rejects_empty_text() {
        let response = coordinator().handle(Request::summarize("  ")).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("No text provided"));

        let response = coordinator().handle(Request::analyze("", "ctx")).await;
        assert_eq!(response.error.as_deref(), Some("No text provided"));
    }

    #[tokio::test]
    async fn coordinator_summarize_surfaces_typed_failure() {
        let response = coordinator().handle(Request::summarize(TERMS)).await;
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Summarizer API not available in this context")
        );
    }

    #[tokio::test]
    async fn coordinator_reports_availability_and_fallback_answer() {
        let handler = coordinator();

        let response = handler.handle(Request::TestAvailability).await;
        assert_eq!(response.available, Some(false));

        let response = handler
            .handle(Request::AnswerQuery {
                question: "Who sees my data?".to_string(),
                context: "summary".to_string(),
                original_text: TERMS.to_string(),
            })
            .await;
        assert!(response.success);
        assert!(response.answer.unwrap().contains("Who sees my data?"));
    }

    #[tokio::test]
    async fn coordinator_does_not_serve_selection() {
        let response = coordinator().handle(Request::GetSelectedText).await;
        assert!(!response.success);
    }

    #[tokio::test]
    async fn page_forwards_summarize_as_selection_analysis() {
        let bus = MessageBus::new();
        let cancel = CancellationToken::new();
        let handle = spawn_endpoint(
            &bus,
            ContextId::Coordinator,
            Arc::new(coordinator()),
            cancel.clone(),
        )
        .unwrap();
        let page = PageHandler::new(bus.clone(), Arc::new(FixedSelection("")));

        let response = page.handle(Request::summarize(TERMS)).await;

        assert!(response.success);
        let analysis = response.analysis.unwrap();
        assert_eq!(analysis.original_text, TERMS);
        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn page_rejects_short_selection_locally() {
        let page = PageHandler::new(MessageBus::new(), Arc::new(FixedSelection("")));

        let response = page.handle(Request::summarize("too short")).await;

        assert!(!response.success);
        assert!(response.error.unwrap().contains("at least 50 characters"));
    }

    #[tokio::test]
    async fn page_reports_unreachable_coordinator() {
        let page = PageHandler::new(MessageBus::new(), Arc::new(FixedSelection("")));

        let response = page.handle(Request::summarize(TERMS)).await;

        assert!(!response.success);
        assert!(response.error.unwrap().contains("no coordinator listener"));
    }

    #[tokio::test]
    async fn page_serves_selection() {
        let page = PageHandler::new(MessageBus::new(), Arc::new(FixedSelection("picked")));
        let response = page.handle(Request::GetSelectedText).await;
        assert_eq!(response.text.as_deref(), Some("picked"));
    }

    #[tokio::test]
    async fn control_surface_routes_selection_to_page() {
        let bus = MessageBus::new();
        let cancel = CancellationToken::new();
        let page = spawn_endpoint(
            &bus,
            ContextId::Page,
            Arc::new(PageHandler::new(bus.clone(), Arc::new(FixedSelection("chosen")))),
            cancel.clone(),
        )
        .unwrap();
        let control = ControlSurfaceHandler::new(bus.clone());

        let response = control.handle(Request::GetSelectedText).await;
        assert_eq!(response.text.as_deref(), Some("chosen"));

        let response = control.handle(Request::TestAvailability).await;
        assert!(!response.success);

        cancel.cancel();
        page.await.unwrap();
    }
}
