use async_trait::async_trait;

use super::model::{ProductTranslation, TranslationStatus};
use crate::error::Result;

#[async_trait]
pub trait TranslationApi: Send + Sync {
    async fn list(&self, product_id: i64) -> Result<Vec<ProductTranslation>>;

    /// `Ok(None)` when the product has no translation for `language_code` yet.
    async fn get(&self, product_id: i64, language_code: &str)
    -> Result<Option<ProductTranslation>>;

    /// Upserts the translation and returns what the server stored.
    async fn save(&self, translation: &ProductTranslation) -> Result<ProductTranslation>;

    async fn delete(&self, product_id: i64, language_code: &str) -> Result<()>;

    async fn status(&self, product_id: i64, language_code: &str) -> Result<TranslationStatus>;
}
