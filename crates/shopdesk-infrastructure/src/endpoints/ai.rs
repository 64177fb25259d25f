use async_trait::async_trait;
use shopdesk_core::ai::{
    AiApi, AiGeneration, AiRequest, BulkOperationReport, BulkOperationRequest,
};
use shopdesk_core::error::Result;

use crate::rest_client::RestClient;

const BULK_OPERATION_PATH: &str = "/admin/ai/bulk-operation";

/// `/admin/ai/*` endpoints.
///
/// The response body of a generation call is decoded with the struct that
/// belongs to the requested kind, so the variant always matches the request.
#[derive(Clone)]
pub struct RestAiApi {
    client: RestClient,
}

impl RestAiApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AiApi for RestAiApi {
    async fn generate(&self, request: &AiRequest) -> Result<AiGeneration> {
        let kind = request.kind();
        let body: serde_json::Value = self.client.post(kind.endpoint(), request).await?;
        let generation = AiGeneration::decode(kind, body)?;
        tracing::debug!(
            "[RestAiApi] {} generated by {} ({} tokens)",
            kind,
            generation.usage.provider,
            generation.usage.tokens_used
        );
        Ok(generation)
    }

    async fn bulk_operation(&self, request: &BulkOperationRequest) -> Result<BulkOperationReport> {
        self.client.post(BULK_OPERATION_PATH, request).await
    }
}
