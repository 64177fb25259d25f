//! Shared fakes for application tests.

use async_trait::async_trait;
use shopdesk_core::ai::{AiApi, AiGeneration, AiRequest, BulkOperationReport, BulkOperationRequest};
use shopdesk_core::config::AutoSaveSettings;
use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::ports::{ConfirmationPrompt, Confirmer, Notice, NoticeLevel, Notifier};
use shopdesk_infrastructure::{MemoryQueryCache, TokioScheduler};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::context::EditorContext;

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices().into_iter().map(|n| n.level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Answers every prompt with a fixed choice and remembers the prompts.
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Mutex<Vec<ConfirmationPrompt>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<ConfirmationPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answer
    }
}

pub struct TestContext {
    pub context: EditorContext,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmer: Arc<ScriptedConfirmer>,
    pub cache: Arc<MemoryQueryCache>,
}

/// Context on the current (paused) tokio runtime.
pub fn test_context(confirm: bool) -> TestContext {
    let notifier = Arc::new(RecordingNotifier::default());
    let confirmer = Arc::new(ScriptedConfirmer::new(confirm));
    let cache = Arc::new(MemoryQueryCache::new(Duration::from_secs(300)));
    let context = EditorContext {
        scheduler: Arc::new(TokioScheduler::current().unwrap()),
        notifier: notifier.clone(),
        confirmer: confirmer.clone(),
        cache: cache.clone(),
        settings: AutoSaveSettings::default(),
    };
    TestContext {
        context,
        notifier,
        confirmer,
        cache,
    }
}

/// Replays queued AI responses in order and records every request.
#[derive(Default)]
pub struct ScriptedAiApi {
    generations: Mutex<VecDeque<Result<serde_json::Value>>>,
    reports: Mutex<VecDeque<Result<BulkOperationReport>>>,
    requests: Mutex<Vec<AiRequest>>,
    bulk_requests: Mutex<Vec<BulkOperationRequest>>,
}

impl ScriptedAiApi {
    /// Queues a flat response body, decoded with the kind of the request
    /// that consumes it.
    pub fn push_generation(&self, body: serde_json::Value) {
        self.generations.lock().unwrap().push_back(Ok(body));
    }

    pub fn push_error(&self, err: ShopdeskError) {
        self.generations.lock().unwrap().push_back(Err(err));
    }

    pub fn push_report(&self, report: BulkOperationReport) {
        self.reports.lock().unwrap().push_back(Ok(report));
    }

    pub fn requests(&self) -> Vec<AiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn bulk_requests(&self) -> Vec<BulkOperationRequest> {
        self.bulk_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiApi for ScriptedAiApi {
    async fn generate(&self, request: &AiRequest) -> Result<AiGeneration> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .generations
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted AI response left");
        AiGeneration::decode(request.kind(), next?)
    }

    async fn bulk_operation(&self, request: &BulkOperationRequest) -> Result<BulkOperationReport> {
        self.bulk_requests.lock().unwrap().push(request.clone());
        self.reports
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted bulk report left")
    }
}
