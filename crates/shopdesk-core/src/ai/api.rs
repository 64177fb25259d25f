use async_trait::async_trait;

use super::bulk::{BulkOperationReport, BulkOperationRequest};
use super::generation::{AiGeneration, AiRequest};
use crate::error::Result;

/// The `/admin/ai/*` endpoints.
///
/// Generation calls are not idempotent: each call is a fresh, billed request
/// and "Regenerate" simply calls again.
#[async_trait]
pub trait AiApi: Send + Sync {
    async fn generate(&self, request: &AiRequest) -> Result<AiGeneration>;

    async fn bulk_operation(&self, request: &BulkOperationRequest) -> Result<BulkOperationReport>;
}
