//! Follow-up question answering.

use super::{AnalysisError, AnalysisOrchestrator, release};
use risklens_domain::{CapabilityKind, PromptTemplate};
use tracing::{error, info, warn};

const KIND: CapabilityKind = CapabilityKind::Generate;

impl AnalysisOrchestrator {
    /// Answer `question` about `original_text`, surfacing failures.
    pub async fn try_answer_query(
        &self,
        question: &str,
        context: &str,
        original_text: &str,
    ) -> Result<String, AnalysisError> {
        let Some(provider) = self.capabilities.generator() else {
            return Err(AnalysisError::CapabilityUnavailable(KIND));
        };
        if !self.probe.probe(KIND).await.is_usable() {
            return Err(AnalysisError::ModelUnavailableOnDevice(KIND));
        }

        let generator = provider
            .create(self.progress.clone())
            .await
            .map_err(AnalysisError::downstream(KIND))?;

        info!("Answering question ({} characters)", question.chars().count());
        let prompt = PromptTemplate::query_prompt(context, original_text, question);
        let outcome = generator.generate(&prompt, &self.settings.query).await;
        release(KIND, generator);
        outcome.map_err(AnalysisError::downstream(KIND))
    }

    /// Answer `question` about `original_text`. Never fails.
    ///
    /// Without a usable generator the answer is a fallback that quotes the
    /// question; any other failure becomes an apology with the reason.
    pub async fn answer_query(&self, question: &str, context: &str, original_text: &str) -> String {
        match self.try_answer_query(question, context, original_text).await {
            Ok(answer) => answer,
            Err(e) if e.is_unavailable() => {
                warn!("Query answering unavailable: {}", e);
                PromptTemplate::query_unavailable(question)
            }
            Err(e) => {
                error!("Query answering failed: {}", e);
                PromptTemplate::query_failed(&e.to_string())
            }
        }
    }
}
