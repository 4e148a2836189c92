//! Composite analysis pipeline.
//!
//! Stages run sequentially: summary, risk, translation. Capability
//! instances are assumed non-reentrant, and translation deliberately waits
//! for the summary stage to finish with the device.

use super::{AnalysisError, AnalysisOrchestrator, release};
use chrono::Utc;
use risklens_domain::{
    AnalysisRequest, AnalysisResult, CapabilityKind, PromptTemplate, TranslateOptions,
    prepare_for_summary, score_danger_points,
};
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

impl AnalysisOrchestrator {
    /// Run every stage and return the composite result. Never fails.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let mut result = AnalysisResult::new(request.text(), Utc::now());
        info!(
            "Starting analysis of {} characters ({})",
            request.text().chars().count(),
            request.context()
        );

        result.summary = self.summary_stage(request).await;
        result.danger_points = score_danger_points(request.text());
        result.translations = self.translation_stage(request.text()).await;

        info!(
            "Analysis complete: {} danger points, {} translations",
            result.danger_points.len(),
            result.translations.len()
        );
        result
    }

    async fn summary_stage(&self, request: &AnalysisRequest) -> String {
        let status = self.probe.probe(CapabilityKind::Summarize).await;
        if !status.is_usable() {
            warn!("Summarizer not available, skipping summary");
            return PromptTemplate::SUMMARY_UNAVAILABLE.to_string();
        }

        let options = self.preferences.summarizer_options();
        let outcome = match prepare_for_summary(request.text()) {
            Ok(cleaned) => {
                self.summarize_after_probe(&cleaned, request.context(), &options, status)
                    .await
            }
            Err(e) => Err(AnalysisError::from(e)),
        };
        match outcome {
            Ok(summary) => summary,
            Err(e) => {
                error!("Summary stage failed: {}", e);
                PromptTemplate::summary_failed(&e.to_string())
            }
        }
    }

    async fn translation_stage(&self, text: &str) -> BTreeMap<String, String> {
        let mut translations = BTreeMap::new();
        if !self.settings.translate || self.settings.target_languages.is_empty() {
            debug!("Translation disabled");
            return translations;
        }
        let Some(provider) = self.capabilities.translator() else {
            debug!("Translator API not available, skipping translations");
            return translations;
        };
        if !self
            .probe
            .probe(CapabilityKind::Translate)
            .await
            .is_usable()
        {
            warn!("Translator model not available, skipping translations");
            return translations;
        }

        let translator = match provider.create(self.progress.clone()).await {
            Ok(translator) => translator,
            Err(e) => {
                error!("Failed to create translator: {}", e);
                return translations;
            }
        };

        for language in &self.settings.target_languages {
            match translator
                .translate(text, &TranslateOptions::to(language.as_str()))
                .await
            {
                Ok(translated) => {
                    translations.insert(language.clone(), translated);
                }
                Err(e) => warn!("Translation to {} failed: {}", language, e),
            }
        }

        release(CapabilityKind::Translate, translator);
        translations
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::config::AnalysisSettings;
    use crate::ports::capability::CapabilityRegistry;
    use risklens_domain::{RiskCategory, TARGET_LANGUAGES};
    use std::sync::Arc;

    const RISKY_TEXT: &str = "A penalty applies. Another penalty, a third penalty, a fourth penalty \
        and a fifth penalty may be severe.";

    fn request(text: &str) -> AnalysisRequest {
        AnalysisRequest::new(text, "General text analysis").unwrap()
    }

    #[tokio::test]
    async fn test_all_capabilities_absent_still_returns_result() {
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(CapabilityRegistry::new()), AnalysisSettings::default());

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert_eq!(result.original_text, RISKY_TEXT);
        assert_eq!(result.summary, PromptTemplate::SUMMARY_UNAVAILABLE);
        assert_eq!(result.danger_points.len(), 1);
        assert_eq!(result.danger_points[0].title(), RiskCategory::Financial);
        assert_eq!(result.danger_points[0].rating(), 9);
        assert!(result.translations.is_empty());
    }

    #[tokio::test]
    async fn test_absent_summarizer_gives_placeholder_even_for_short_text() {
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(CapabilityRegistry::new()), AnalysisSettings::default());

        let result = orchestrator.analyze(&request("short")).await;

        assert_eq!(result.summary, PromptTemplate::SUMMARY_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_short_text_degrades_summary_but_keeps_other_stages() {
        let summarizer = Arc::new(FakeSummarizerProvider::new(Script::default()));
        let translator = Arc::new(FakeTranslatorProvider::new(Script::default()));
        let registry = CapabilityRegistry::new()
            .with_summarizer(summarizer.clone())
            .with_translator(translator.clone());
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(registry), AnalysisSettings::default());

        let result = orchestrator.analyze(&request("We may share data.")).await;

        assert!(result.summary.starts_with("Failed to generate summary: "));
        assert!(result.summary.contains("too short"));
        assert_eq!(summarizer.counters().created(), 0);
        assert_eq!(result.danger_points[0].title(), RiskCategory::Privacy);
        assert_eq!(result.translations.len(), TARGET_LANGUAGES.len());
        assert_eq!(result.translations["es"], "[es] We may share data.");
    }

    #[tokio::test]
    async fn test_summary_failure_becomes_placeholder() {
        let summarizer = Arc::new(FakeSummarizerProvider::new(
            Script::default().fail_operation("out of memory"),
        ));
        let registry = CapabilityRegistry::new().with_summarizer(summarizer.clone());
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(registry), AnalysisSettings::default());

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert_eq!(result.summary, "Failed to generate summary: out of memory");
        assert_eq!(summarizer.counters().destroyed(), 1);
        assert!(!result.danger_points.is_empty());
    }

    #[tokio::test]
    async fn test_summary_stage_uses_summarizer() {
        let summarizer = Arc::new(FakeSummarizerProvider::new(Script::default()));
        let registry = CapabilityRegistry::new().with_summarizer(summarizer.clone());
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(registry), AnalysisSettings::default());

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert_eq!(result.summary, format!("summary of {}", RISKY_TEXT));
        assert_eq!(summarizer.counters().created(), 1);
        assert_eq!(summarizer.counters().destroyed(), 1);
    }

    #[tokio::test]
    async fn test_summary_stage_checks_availability_once() {
        let summarizer = Arc::new(FakeSummarizerProvider::new(Script::default()));
        let registry = CapabilityRegistry::new().with_summarizer(summarizer.clone());
        let settings = AnalysisSettings::default().with_translation(false);
        let orchestrator = AnalysisOrchestrator::new(Arc::new(registry), settings);

        orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert_eq!(summarizer.counters().availability_checks(), 1);
        assert_eq!(summarizer.counters().created(), 1);
    }

    #[tokio::test]
    async fn test_one_failing_language_is_omitted() {
        let translator = Arc::new(FakeTranslatorProvider::new(
            Script::default().fail_language("ja"),
        ));
        let registry = CapabilityRegistry::new().with_translator(translator.clone());
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(registry), AnalysisSettings::default());

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert_eq!(result.translations.len(), TARGET_LANGUAGES.len() - 1);
        assert!(!result.translations.contains_key("ja"));
        assert!(result.translations.contains_key("hi"));
        assert_eq!(translator.counters().created(), 1);
        assert_eq!(translator.counters().destroyed(), 1);
        assert_eq!(translator.counters().calls(), TARGET_LANGUAGES.len());
    }

    #[tokio::test]
    async fn test_every_language_failing_still_destroys_once() {
        let mut script = Script::default();
        for language in TARGET_LANGUAGES {
            script = script.fail_language(language);
        }
        let translator = Arc::new(FakeTranslatorProvider::new(script));
        let registry = CapabilityRegistry::new().with_translator(translator.clone());
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(registry), AnalysisSettings::default());

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert!(result.translations.is_empty());
        assert_eq!(translator.counters().destroyed(), 1);
    }

    #[tokio::test]
    async fn test_translator_create_failure_skips_stage() {
        let translator = Arc::new(FakeTranslatorProvider::new(Script::default().fail_create()));
        let registry = CapabilityRegistry::new().with_translator(translator.clone());
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(registry), AnalysisSettings::default());

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert!(result.translations.is_empty());
        assert_eq!(translator.counters().calls(), 0);
    }

    #[tokio::test]
    async fn test_translation_disabled_never_creates() {
        let translator = Arc::new(FakeTranslatorProvider::new(Script::default()));
        let registry = CapabilityRegistry::new().with_translator(translator.clone());
        let settings = AnalysisSettings::default().with_translation(false);
        let orchestrator = AnalysisOrchestrator::new(Arc::new(registry), settings);

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert!(result.translations.is_empty());
        assert_eq!(translator.counters().created(), 0);
    }

    #[tokio::test]
    async fn test_translations_use_auto_detected_source() {
        let translator = Arc::new(FakeTranslatorProvider::new(Script::default()));
        let registry = CapabilityRegistry::new().with_translator(translator.clone());
        let settings = AnalysisSettings::default().with_target_languages(["fr", "de"]);
        let orchestrator = AnalysisOrchestrator::new(Arc::new(registry), settings);

        orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert_eq!(
            translator.translated_with(),
            vec![TranslateOptions::to("fr"), TranslateOptions::to("de")]
        );
    }

    #[tokio::test]
    async fn test_timestamp_is_call_time() {
        let orchestrator =
            AnalysisOrchestrator::new(Arc::new(CapabilityRegistry::new()), AnalysisSettings::default());
        let before = Utc::now();

        let result = orchestrator.analyze(&request(RISKY_TEXT)).await;

        assert!(result.timestamp >= before);
        assert!(result.timestamp <= Utc::now());
    }
}
