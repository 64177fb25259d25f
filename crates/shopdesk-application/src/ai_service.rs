//! AI content generation with client-side validation and notices.

use shopdesk_core::ai::{
    AiApi, AiGeneration, AiKind, AiPayload, AiPrompt, AiRequest, AiUsage, BulkOperationReport,
    BulkOperationRequest,
};
use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::ports::{Notice, Notifier};
use shopdesk_core::validation::Validate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Ledger {
    last: HashMap<AiKind, AiRequest>,
    total_cost: f64,
    generations: usize,
}

/// Issues generation requests and keeps the last request per kind so the
/// UI can offer "Regenerate".
///
/// Every call is a fresh, billed request; nothing is cached.
pub struct AiContentService {
    api: Arc<dyn AiApi>,
    notifier: Arc<dyn Notifier>,
    ledger: Mutex<Ledger>,
}

impl AiContentService {
    pub fn new(api: Arc<dyn AiApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generates content for a typed prompt and returns the matching payload.
    pub async fn generate<P: AiPrompt>(&self, prompt: P) -> Result<(P::Output, AiUsage)> {
        let generation = self.generate_request(prompt.into()).await?;
        Self::typed(generation)
    }

    /// Repeats the last request of `T`'s kind.
    pub async fn regenerate<T: AiPayload>(&self) -> Result<(T, AiUsage)> {
        let request = self
            .ledger()
            .last
            .get(&T::KIND)
            .cloned()
            .ok_or_else(|| ShopdeskError::not_found("AI request", T::KIND.to_string()))?;
        let generation = self.generate_request(request).await?;
        Self::typed(generation)
    }

    fn typed<T: AiPayload>(generation: AiGeneration) -> Result<(T, AiUsage)> {
        let kind = generation.kind();
        generation.into_payload::<T>().ok_or_else(|| {
            ShopdeskError::internal(format!(
                "expected {} content, received {}",
                T::KIND,
                kind
            ))
        })
    }

    /// Untyped entry point used by the CLI.
    pub async fn generate_request(&self, request: AiRequest) -> Result<AiGeneration> {
        let kind = request.kind();
        if let Err(err) = request.check() {
            tracing::debug!("[AiContentService] {} request rejected: {}", kind, err);
            return Err(err);
        }
        self.ledger().last.insert(kind, request.clone());

        tracing::info!("[AiContentService] Generating {}", kind);
        match self.api.generate(&request).await {
            Ok(generation) => {
                let usage = &generation.usage;
                {
                    let mut ledger = self.ledger();
                    ledger.total_cost += usage.cost;
                    ledger.generations += 1;
                }
                tracing::info!(
                    "[AiContentService] {} generated by {} ({} tokens, ${:.4})",
                    kind,
                    usage.provider,
                    usage.tokens_used,
                    usage.cost
                );
                self.notifier.notify(Notice::info(format!(
                    "Generated with {} (${:.4})",
                    provider_label(&usage.provider),
                    usage.cost
                )));
                Ok(generation)
            }
            Err(err) => {
                tracing::warn!("[AiContentService] {} generation failed: {}", kind, err);
                self.notifier.notify(Notice::error(format!(
                    "AI generation failed: {}",
                    err.user_message()
                )));
                Err(err)
            }
        }
    }

    /// Runs a bulk operation. Per-item failures are reported, not raised.
    pub async fn bulk(&self, request: &BulkOperationRequest) -> Result<BulkOperationReport> {
        request.check()?;

        tracing::info!(
            "[AiContentService] Bulk {} for {} products",
            request.operation,
            request.product_ids.len()
        );
        let report = match self.api.bulk_operation(request).await {
            Ok(report) => report,
            Err(err) => {
                self.notifier.notify(Notice::error(format!(
                    "Bulk operation failed: {}",
                    err.user_message()
                )));
                return Err(err);
            }
        };

        self.ledger().total_cost += report.total_cost;
        let message = format!("Bulk {}: {}", request.operation, report.summary());
        let notice = if report.is_total_failure() {
            Notice::error(message)
        } else if report.is_partial_failure() {
            Notice::warning(message)
        } else {
            Notice::success(message)
        };
        self.notifier.notify(notice);
        Ok(report)
    }

    /// Cost of every generation issued through this service so far.
    pub fn total_cost(&self) -> f64 {
        self.ledger().total_cost
    }

    pub fn generation_count(&self) -> usize {
        self.ledger().generations
    }

    pub fn last_request(&self, kind: AiKind) -> Option<AiRequest> {
        self.ledger().last.get(&kind).cloned()
    }
}

fn provider_label(provider: &str) -> &str {
    if provider.is_empty() { "AI" } else { provider }
}
