use async_trait::async_trait;
use shopdesk_core::cms::{CmsApi, CmsBlock, CmsBlockInput, CmsPage, CmsPageInput};
use shopdesk_core::error::Result;

use crate::rest_client::RestClient;

#[derive(Clone)]
pub struct RestCmsApi {
    client: RestClient,
}

impl RestCmsApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CmsApi for RestCmsApi {
    async fn list_pages(&self) -> Result<Vec<CmsPage>> {
        self.client.get("/cms/pages").await
    }

    async fn get_page(&self, id: i64) -> Result<CmsPage> {
        self.client.get(&format!("/cms/pages/{}", id)).await
    }

    async fn create_page(&self, input: &CmsPageInput) -> Result<CmsPage> {
        self.client.post("/cms/pages", input).await
    }

    async fn update_page(&self, id: i64, input: &CmsPageInput) -> Result<CmsPage> {
        self.client.put(&format!("/cms/pages/{}", id), input).await
    }

    async fn delete_page(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/cms/pages/{}", id)).await
    }

    async fn list_blocks(&self) -> Result<Vec<CmsBlock>> {
        self.client.get("/cms/blocks").await
    }

    async fn get_block(&self, id: i64) -> Result<CmsBlock> {
        self.client.get(&format!("/cms/blocks/{}", id)).await
    }

    async fn create_block(&self, input: &CmsBlockInput) -> Result<CmsBlock> {
        self.client.post("/cms/blocks", input).await
    }

    async fn update_block(&self, id: i64, input: &CmsBlockInput) -> Result<CmsBlock> {
        self.client.put(&format!("/cms/blocks/{}", id), input).await
    }

    async fn delete_block(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/cms/blocks/{}", id)).await
    }
}
