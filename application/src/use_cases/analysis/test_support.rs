//! Scripted capability fakes shared by the use case tests.

use crate::ports::capability::{
    CapabilityError, CapabilityInstance, CapabilityProvider, Generator, GeneratorProvider,
    Summarizer, SummarizerProvider, Translator, TranslatorProvider,
};
use crate::ports::progress::DownloadProgressObserver;
use async_trait::async_trait;
use risklens_domain::{
    CapabilityKind, GenerateOptions, SummarizerOptions, TranslateOptions,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// How a fake capability behaves
#[derive(Debug, Clone)]
pub(crate) struct Script {
    availability: Result<String, CapabilityError>,
    fail_create: bool,
    operation_error: Option<String>,
    failing_languages: Vec<String>,
    fail_destroy: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            availability: Ok("readily".to_string()),
            fail_create: false,
            operation_error: None,
            failing_languages: Vec::new(),
            fail_destroy: false,
        }
    }
}

impl Script {
    pub(crate) fn availability(mut self, raw: &str) -> Self {
        self.availability = Ok(raw.to_string());
        self
    }

    pub(crate) fn availability_error(mut self) -> Self {
        self.availability = Err(CapabilityError::ConnectionError("refused".to_string()));
        self
    }

    pub(crate) fn fail_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub(crate) fn fail_operation(mut self, message: &str) -> Self {
        self.operation_error = Some(message.to_string());
        self
    }

    pub(crate) fn fail_language(mut self, language: &str) -> Self {
        self.failing_languages.push(language.to_string());
        self
    }

    pub(crate) fn fail_destroy(mut self) -> Self {
        self.fail_destroy = true;
        self
    }

    fn create_result(&self, kind: CapabilityKind) -> Result<(), CapabilityError> {
        if self.fail_create {
            return Err(CapabilityError::CreateFailed {
                kind,
                message: "scripted create failure".to_string(),
            });
        }
        Ok(())
    }

    fn operation_result(&self) -> Result<(), CapabilityError> {
        match &self.operation_error {
            Some(message) => Err(CapabilityError::OperationFailed(message.clone())),
            None => Ok(()),
        }
    }
}

/// Lifecycle counters shared between a provider and its instances
#[derive(Debug, Default)]
pub(crate) struct Counters {
    availability_checks: AtomicUsize,
    created: AtomicUsize,
    destroyed: AtomicUsize,
    calls: AtomicUsize,
    contexts: Mutex<Vec<String>>,
}

impl Counters {
    pub(crate) fn availability_checks(&self) -> usize {
        self.availability_checks.load(Ordering::SeqCst)
    }

    pub(crate) fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub(crate) fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn contexts(&self) -> Vec<String> {
        self.contexts.lock().unwrap().clone()
    }
}

struct FakeInstance {
    counters: Arc<Counters>,
    script: Script,
}

impl FakeInstance {
    fn new(counters: Arc<Counters>, script: Script) -> Self {
        counters.created.fetch_add(1, Ordering::SeqCst);
        Self { counters, script }
    }

    fn begin_call(&self) -> Result<(), CapabilityError> {
        self.counters.calls.fetch_add(1, Ordering::SeqCst);
        self.script.operation_result()
    }
}

impl CapabilityInstance for FakeInstance {
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError> {
        self.counters.destroyed.fetch_add(1, Ordering::SeqCst);
        if self.script.fail_destroy {
            return Err(CapabilityError::Other("scripted destroy failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Summarizer for FakeInstance {
    async fn summarize(&self, text: &str, context: &str) -> Result<String, CapabilityError> {
        self.begin_call()?;
        self.counters.contexts.lock().unwrap().push(context.to_string());
        Ok(format!("summary of {}", text))
    }
}

// ==================== Summarizer ====================

pub(crate) struct FakeSummarizerProvider {
    script: Script,
    counters: Arc<Counters>,
    created_with: Mutex<Vec<SummarizerOptions>>,
}

impl FakeSummarizerProvider {
    pub(crate) fn new(script: Script) -> Self {
        Self {
            script,
            counters: Arc::new(Counters::default()),
            created_with: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }

    pub(crate) fn created_with(&self) -> Vec<SummarizerOptions> {
        self.created_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl CapabilityProvider for FakeSummarizerProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Summarize
    }

    async fn availability(&self, _output_language: &str) -> Result<String, CapabilityError> {
        self.counters.availability_checks.fetch_add(1, Ordering::SeqCst);
        self.script.availability.clone()
    }
}

#[async_trait]
impl SummarizerProvider for FakeSummarizerProvider {
    async fn create(
        &self,
        options: &SummarizerOptions,
        _progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Summarizer>, CapabilityError> {
        self.script.create_result(CapabilityKind::Summarize)?;
        self.created_with.lock().unwrap().push(options.clone());
        Ok(Box::new(FakeInstance::new(
            self.counters.clone(),
            self.script.clone(),
        )))
    }
}

// ==================== Translator ====================

struct FakeTranslator {
    inner: FakeInstance,
    seen: Arc<Mutex<Vec<TranslateOptions>>>,
}

impl CapabilityInstance for FakeTranslator {
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError> {
        Box::new(self.inner).destroy()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<String, CapabilityError> {
        self.inner.begin_call()?;
        self.seen.lock().unwrap().push(options.clone());
        if self
            .inner
            .script
            .failing_languages
            .contains(&options.target_language)
        {
            return Err(CapabilityError::OperationFailed(format!(
                "language pair unsupported: {}",
                options.target_language
            )));
        }
        Ok(format!("[{}] {}", options.target_language, text))
    }
}

pub(crate) struct FakeTranslatorProvider {
    script: Script,
    counters: Arc<Counters>,
    seen: Arc<Mutex<Vec<TranslateOptions>>>,
}

impl FakeTranslatorProvider {
    pub(crate) fn new(script: Script) -> Self {
        Self {
            script,
            counters: Arc::new(Counters::default()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }

    pub(crate) fn translated_with(&self) -> Vec<TranslateOptions> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CapabilityProvider for FakeTranslatorProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Translate
    }

    async fn availability(&self, _output_language: &str) -> Result<String, CapabilityError> {
        self.counters.availability_checks.fetch_add(1, Ordering::SeqCst);
        self.script.availability.clone()
    }
}

#[async_trait]
impl TranslatorProvider for FakeTranslatorProvider {
    async fn create(
        &self,
        _progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Translator>, CapabilityError> {
        self.script.create_result(CapabilityKind::Translate)?;
        Ok(Box::new(FakeTranslator {
            inner: FakeInstance::new(self.counters.clone(), self.script.clone()),
            seen: self.seen.clone(),
        }))
    }
}

// ==================== Generator ====================

struct FakeGenerator {
    inner: FakeInstance,
    prompts: Arc<Mutex<Vec<String>>>,
    options: Arc<Mutex<Vec<GenerateOptions>>>,
}

impl CapabilityInstance for FakeGenerator {
    fn destroy(self: Box<Self>) -> Result<(), CapabilityError> {
        Box::new(self.inner).destroy()
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, CapabilityError> {
        self.inner.begin_call()?;
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.options.lock().unwrap().push(*options);
        Ok("generated answer".to_string())
    }
}

pub(crate) struct FakeGeneratorProvider {
    script: Script,
    counters: Arc<Counters>,
    prompts: Arc<Mutex<Vec<String>>>,
    options: Arc<Mutex<Vec<GenerateOptions>>>,
}

impl FakeGeneratorProvider {
    pub(crate) fn new(script: Script) -> Self {
        Self {
            script,
            counters: Arc::new(Counters::default()),
            prompts: Arc::new(Mutex::new(Vec::new())),
            options: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn options(&self) -> Vec<GenerateOptions> {
        self.options.lock().unwrap().clone()
    }
}

#[async_trait]
impl CapabilityProvider for FakeGeneratorProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Generate
    }

    async fn availability(&self, _output_language: &str) -> Result<String, CapabilityError> {
        self.counters.availability_checks.fetch_add(1, Ordering::SeqCst);
        self.script.availability.clone()
    }
}

#[async_trait]
impl GeneratorProvider for FakeGeneratorProvider {
    async fn create(
        &self,
        _progress: Option<Arc<dyn DownloadProgressObserver>>,
    ) -> Result<Box<dyn Generator>, CapabilityError> {
        self.script.create_result(CapabilityKind::Generate)?;
        Ok(Box::new(FakeGenerator {
            inner: FakeInstance::new(self.counters.clone(), self.script.clone()),
            prompts: self.prompts.clone(),
            options: self.options.clone(),
        }))
    }
}
