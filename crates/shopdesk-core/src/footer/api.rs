use async_trait::async_trait;

use super::model::Footer;
use crate::error::Result;

#[async_trait]
pub trait FooterApi: Send + Sync {
    /// `Ok(None)` when no footer exists for the language yet.
    async fn get(&self, language_code: &str) -> Result<Option<Footer>>;

    async fn save(&self, footer: &Footer) -> Result<Footer>;
}
