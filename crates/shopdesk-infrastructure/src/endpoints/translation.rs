use async_trait::async_trait;
use shopdesk_core::error::Result;
use shopdesk_core::translation::{ProductTranslation, TranslationApi, TranslationStatus};

use super::segment;
use crate::rest_client::RestClient;

#[derive(Clone)]
pub struct RestTranslationApi {
    client: RestClient,
}

impl RestTranslationApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn path(product_id: i64, language_code: &str) -> String {
        format!(
            "/products/{}/translations/{}",
            product_id,
            segment(language_code)
        )
    }
}

#[async_trait]
impl TranslationApi for RestTranslationApi {
    async fn list(&self, product_id: i64) -> Result<Vec<ProductTranslation>> {
        self.client
            .get(&format!("/products/{}/translations", product_id))
            .await
    }

    async fn get(
        &self,
        product_id: i64,
        language_code: &str,
    ) -> Result<Option<ProductTranslation>> {
        self.client
            .get_optional(&Self::path(product_id, language_code))
            .await
    }

    async fn save(&self, translation: &ProductTranslation) -> Result<ProductTranslation> {
        self.client
            .put(
                &Self::path(translation.product_id, &translation.language_code),
                translation,
            )
            .await
    }

    async fn delete(&self, product_id: i64, language_code: &str) -> Result<()> {
        self.client
            .delete(&Self::path(product_id, language_code))
            .await
    }

    async fn status(&self, product_id: i64, language_code: &str) -> Result<TranslationStatus> {
        self.client
            .get_with_query(
                &format!("/products/{}/translations/status", product_id),
                &[("lang", language_code)],
            )
            .await
    }
}
