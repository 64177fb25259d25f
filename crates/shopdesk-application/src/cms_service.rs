//! CMS pages and content blocks.

use shopdesk_core::cms::{CmsApi, CmsBlock, CmsBlockInput, CmsPage, CmsPageInput};
use shopdesk_core::error::Result;
use shopdesk_core::ports::{Notice, Notifier, QueryCache};
use shopdesk_core::validation::Validate;
use std::sync::Arc;

use crate::cache_keys;

pub struct CmsService {
    api: Arc<dyn CmsApi>,
    cache: Arc<dyn QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl CmsService {
    pub fn new(
        api: Arc<dyn CmsApi>,
        cache: Arc<dyn QueryCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    pub async fn pages(&self) -> Result<Vec<CmsPage>> {
        cache_keys::cached(self.cache.as_ref(), &cache_keys::cms_pages(), || {
            self.api.list_pages()
        })
        .await
    }

    pub async fn page(&self, id: i64) -> Result<CmsPage> {
        self.api.get_page(id).await
    }

    pub async fn create_page(&self, input: &CmsPageInput) -> Result<CmsPage> {
        input.check()?;
        let page = self.api.create_page(input).await?;
        self.changed(format!("Page \"{}\" created", page.title));
        Ok(page)
    }

    pub async fn update_page(&self, id: i64, input: &CmsPageInput) -> Result<CmsPage> {
        input.check()?;
        let page = self.api.update_page(id, input).await?;
        self.changed(format!("Page \"{}\" updated", page.title));
        Ok(page)
    }

    pub async fn delete_page(&self, id: i64) -> Result<()> {
        self.api.delete_page(id).await?;
        self.changed("Page deleted".to_string());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------

    pub async fn blocks(&self) -> Result<Vec<CmsBlock>> {
        cache_keys::cached(self.cache.as_ref(), &cache_keys::cms_blocks(), || {
            self.api.list_blocks()
        })
        .await
    }

    pub async fn block(&self, id: i64) -> Result<CmsBlock> {
        self.api.get_block(id).await
    }

    pub async fn create_block(&self, input: &CmsBlockInput) -> Result<CmsBlock> {
        input.check()?;
        let block = self.api.create_block(input).await?;
        self.changed(format!("Block `{}` created", block.identifier));
        Ok(block)
    }

    pub async fn update_block(&self, id: i64, input: &CmsBlockInput) -> Result<CmsBlock> {
        input.check()?;
        let block = self.api.update_block(id, input).await?;
        self.changed(format!("Block `{}` updated", block.identifier));
        Ok(block)
    }

    pub async fn delete_block(&self, id: i64) -> Result<()> {
        self.api.delete_block(id).await?;
        self.changed("Block deleted".to_string());
        Ok(())
    }

    fn changed(&self, message: String) {
        self.cache.invalidate_prefix(cache_keys::CMS);
        tracing::info!("[CmsService] {}", message);
        self.notifier.notify(Notice::success(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingNotifier;
    use async_trait::async_trait;
    use shopdesk_core::error::ShopdeskError;
    use shopdesk_infrastructure::MemoryQueryCache;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct MockCmsApi {
        pages: Mutex<Vec<CmsPage>>,
        page_lists: AtomicUsize,
    }

    fn page_from(id: i64, input: &CmsPageInput) -> CmsPage {
        CmsPage {
            id,
            slug: input.slug.clone(),
            title: input.title.clone(),
            content: input.content.clone(),
            meta_title: input.meta_title.clone(),
            meta_description: input.meta_description.clone(),
            is_published: input.is_published,
            updated_at: None,
        }
    }

    #[async_trait]
    impl CmsApi for MockCmsApi {
        async fn list_pages(&self) -> Result<Vec<CmsPage>> {
            self.page_lists.fetch_add(1, Ordering::SeqCst);
            Ok(self.pages.lock().unwrap().clone())
        }

        async fn get_page(&self, id: i64) -> Result<CmsPage> {
            self.pages
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| ShopdeskError::not_found("Page", id.to_string()))
        }

        async fn create_page(&self, input: &CmsPageInput) -> Result<CmsPage> {
            let mut pages = self.pages.lock().unwrap();
            let page = page_from(pages.len() as i64 + 1, input);
            pages.push(page.clone());
            Ok(page)
        }

        async fn update_page(&self, id: i64, input: &CmsPageInput) -> Result<CmsPage> {
            Ok(page_from(id, input))
        }

        async fn delete_page(&self, id: i64) -> Result<()> {
            self.pages.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }

        async fn list_blocks(&self) -> Result<Vec<CmsBlock>> {
            Ok(Vec::new())
        }

        async fn get_block(&self, id: i64) -> Result<CmsBlock> {
            Err(ShopdeskError::not_found("Block", id.to_string()))
        }

        async fn create_block(&self, input: &CmsBlockInput) -> Result<CmsBlock> {
            Ok(CmsBlock {
                id: 1,
                identifier: input.identifier.clone(),
                title: input.title.clone(),
                content: input.content.clone(),
                is_active: input.is_active,
            })
        }

        async fn update_block(&self, id: i64, input: &CmsBlockInput) -> Result<CmsBlock> {
            let mut block = self.create_block(input).await?;
            block.id = id;
            Ok(block)
        }

        async fn delete_block(&self, _id: i64) -> Result<()> {
            Ok(())
        }
    }

    fn service() -> (CmsService, Arc<MockCmsApi>) {
        let api = Arc::new(MockCmsApi::default());
        let service = CmsService::new(
            api.clone(),
            Arc::new(MemoryQueryCache::new(Duration::from_secs(60))),
            Arc::new(RecordingNotifier::default()),
        );
        (service, api)
    }

    #[tokio::test]
    async fn test_create_page_refreshes_cached_list() {
        let (service, api) = service();
        assert!(service.pages().await.unwrap().is_empty());
        assert!(service.pages().await.unwrap().is_empty());
        assert_eq!(api.page_lists.load(Ordering::SeqCst), 1);

        let input = CmsPageInput {
            slug: "about-us".to_string(),
            title: "About us".to_string(),
            content: "<p>Hello</p>".to_string(),
            is_published: true,
            ..Default::default()
        };
        service.create_page(&input).await.unwrap();

        assert_eq!(service.pages().await.unwrap().len(), 1);
        assert_eq!(api.page_lists.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_published_page_without_content_is_rejected() {
        let (service, api) = service();
        let input = CmsPageInput {
            slug: "about-us".to_string(),
            title: "About us".to_string(),
            is_published: true,
            ..Default::default()
        };
        let err = service.create_page(&input).await.unwrap_err();
        assert!(matches!(err, ShopdeskError::Validation(ref e) if e.has_field("content")));
        assert!(api.pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_block_identifier_is_validated() {
        let (service, _) = service();
        let mut input = CmsBlockInput {
            identifier: "Home Hero".to_string(),
            title: "Hero".to_string(),
            content: "<h1>Welcome</h1>".to_string(),
            is_active: true,
        };
        assert!(service.create_block(&input).await.is_err());

        input.identifier = "home_hero".to_string();
        let block = service.update_block(3, &input).await.unwrap();
        assert_eq!(block.id, 3);
    }
}
