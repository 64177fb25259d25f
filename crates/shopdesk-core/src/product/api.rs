use async_trait::async_trait;

use super::model::{Product, ProductInput, ProductPage, ProductQuery};
use crate::error::Result;

/// Product endpoints of the admin REST API.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self, query: &ProductQuery) -> Result<ProductPage>;

    async fn get(&self, id: i64) -> Result<Product>;

    /// Creates a product; the image, if any, travels as a multipart part.
    async fn create(&self, input: &ProductInput) -> Result<Product>;

    async fn update(&self, id: i64, input: &ProductInput) -> Result<Product>;

    async fn delete(&self, id: i64) -> Result<()>;
}
