use async_trait::async_trait;

use super::model::{CmsBlock, CmsBlockInput, CmsPage, CmsPageInput};
use crate::error::Result;

#[async_trait]
pub trait CmsApi: Send + Sync {
    async fn list_pages(&self) -> Result<Vec<CmsPage>>;
    async fn get_page(&self, id: i64) -> Result<CmsPage>;
    async fn create_page(&self, input: &CmsPageInput) -> Result<CmsPage>;
    async fn update_page(&self, id: i64, input: &CmsPageInput) -> Result<CmsPage>;
    async fn delete_page(&self, id: i64) -> Result<()>;

    async fn list_blocks(&self) -> Result<Vec<CmsBlock>>;
    async fn get_block(&self, id: i64) -> Result<CmsBlock>;
    async fn create_block(&self, input: &CmsBlockInput) -> Result<CmsBlock>;
    async fn update_block(&self, id: i64, input: &CmsBlockInput) -> Result<CmsBlock>;
    async fn delete_block(&self, id: i64) -> Result<()>;
}
