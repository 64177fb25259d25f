use async_trait::async_trait;

use super::model::{Language, LanguageInput};
use crate::error::Result;

#[async_trait]
pub trait LanguageApi: Send + Sync {
    /// Lists languages; disabled ones only when `include_disabled` is set.
    async fn list(&self, include_disabled: bool) -> Result<Vec<Language>>;

    async fn create(&self, input: &LanguageInput) -> Result<Language>;

    async fn update(&self, code: &str, input: &LanguageInput) -> Result<Language>;

    /// Flips `is_enabled` server-side and returns the new state.
    async fn toggle(&self, code: &str) -> Result<Language>;

    /// Deletes the language together with every translation stored for it.
    async fn delete(&self, code: &str) -> Result<()>;
}
