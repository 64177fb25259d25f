//! Product list and create/edit form submission.

use shopdesk_core::error::Result;
use shopdesk_core::form::FormState;
use shopdesk_core::ports::{Notice, Notifier, QueryCache};
use shopdesk_core::product::{Product, ProductApi, ProductInput, ProductPage, ProductQuery};
use std::future::Future;
use std::sync::Arc;

use crate::cache_keys;

pub struct ProductFormService {
    api: Arc<dyn ProductApi>,
    cache: Arc<dyn QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl ProductFormService {
    pub fn new(
        api: Arc<dyn ProductApi>,
        cache: Arc<dyn QueryCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    pub async fn list(&self, query: &ProductQuery) -> Result<ProductPage> {
        let key = cache_keys::product_list(query);
        cache_keys::cached(self.cache.as_ref(), &key, || self.api.list(query)).await
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        cache_keys::cached(self.cache.as_ref(), &cache_keys::product(id), || {
            self.api.get(id)
        })
        .await
    }

    /// Submits the create form. `Ok(None)` means the form blocked the
    /// submission (invalid or already submitting) and nothing was sent.
    pub async fn submit_create(
        &self,
        form: &mut FormState<ProductInput>,
    ) -> Result<Option<Product>> {
        self.submit(form, "Product created", |input| async move {
            self.api.create(&input).await
        })
        .await
    }

    /// Submits the edit form for product `id`.
    pub async fn submit_update(
        &self,
        id: i64,
        form: &mut FormState<ProductInput>,
    ) -> Result<Option<Product>> {
        self.submit(form, "Product updated", |input| async move {
            self.api.update(id, &input).await
        })
        .await
    }

    async fn submit<F, Fut>(
        &self,
        form: &mut FormState<ProductInput>,
        success: &str,
        send: F,
    ) -> Result<Option<Product>>
    where
        F: FnOnce(ProductInput) -> Fut,
        Fut: Future<Output = Result<Product>>,
    {
        let Some(input) = form.begin_submit() else {
            tracing::debug!(
                "[ProductFormService] Submission blocked: {}",
                form.errors()
            );
            return Ok(None);
        };

        let result = send(input).await;
        form.finish_submit(&result);
        match result {
            Ok(product) => {
                self.cache.invalidate_prefix(cache_keys::PRODUCTS);
                tracing::info!("[ProductFormService] {} ({})", success, product.id);
                self.notifier
                    .notify(Notice::success(format!("{}: {}", success, product.name)));
                Ok(Some(product))
            }
            Err(err) => {
                tracing::warn!("[ProductFormService] Submission failed: {}", err);
                self.notifier.notify(Notice::error(err.user_message()));
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.cache.invalidate_prefix(cache_keys::PRODUCTS);
                self.notifier.notify(Notice::success("Product deleted"));
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(Notice::error(err.user_message()));
                Err(err)
            }
        }
    }
}
