//! Storefront language management.

use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::language::{Language, LanguageApi, LanguageInput};
use shopdesk_core::ports::{ConfirmationPrompt, Confirmer, Notice, Notifier, QueryCache};
use shopdesk_core::validation::{FieldError, Validate, ValidationErrors};
use std::sync::Arc;

use crate::cache_keys;

pub struct LanguageService {
    api: Arc<dyn LanguageApi>,
    cache: Arc<dyn QueryCache>,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
}

impl LanguageService {
    pub fn new(
        api: Arc<dyn LanguageApi>,
        cache: Arc<dyn QueryCache>,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
            confirmer,
        }
    }

    pub async fn list(&self, include_disabled: bool) -> Result<Vec<Language>> {
        cache_keys::cached(
            self.cache.as_ref(),
            &cache_keys::languages(include_disabled),
            || self.api.list(include_disabled),
        )
        .await
    }

    /// Looks a language up by code among all languages, enabled or not.
    pub async fn find(&self, code: &str) -> Result<Language> {
        self.list(true)
            .await?
            .into_iter()
            .find(|l| l.code == code)
            .ok_or_else(|| ShopdeskError::not_found("Language", code))
    }

    pub async fn create(&self, input: &LanguageInput) -> Result<Language> {
        input.check()?;
        let language = self.api.create(input).await?;
        self.changed(format!("Language {} added", language.display_label()));
        Ok(language)
    }

    pub async fn update(&self, code: &str, input: &LanguageInput) -> Result<Language> {
        input.check()?;
        let language = self.api.update(code, input).await?;
        self.changed(format!("Language {} updated", language.display_label()));
        Ok(language)
    }

    /// Flips the enabled flag. The default language cannot be disabled.
    pub async fn toggle(&self, code: &str) -> Result<Language> {
        let current = self.find(code).await?;
        if current.is_default && current.is_enabled {
            return Err(refuse("is_enabled", "The default language cannot be disabled"));
        }

        let language = self.api.toggle(code).await?;
        let state = if language.is_enabled { "enabled" } else { "disabled" };
        self.changed(format!("Language {} {}", language.display_label(), state));
        Ok(language)
    }

    /// Deletes a language after confirmation. Returns `Ok(false)` when the
    /// user declined.
    pub async fn delete(&self, code: &str) -> Result<bool> {
        let language = self.find(code).await?;
        if language.is_default {
            return Err(refuse("code", "The default language cannot be deleted"));
        }

        let prompt = ConfirmationPrompt::new(
            format!("Delete {}?", language.display_label()),
            "This cannot be undone.",
        )
        .with_consequence("All product translations in this language are deleted")
        .with_consequence("The footer for this language is deleted")
        .with_consequence("The storefront stops offering this language");
        if !self.confirmer.confirm(&prompt).await {
            tracing::debug!("[LanguageService] Deletion of {} cancelled", code);
            return Ok(false);
        }

        self.api.delete(code).await?;
        self.cache.invalidate_prefix(cache_keys::TRANSLATIONS);
        self.changed(format!("Language {} deleted", language.display_label()));
        Ok(true)
    }

    fn changed(&self, message: String) {
        self.cache.invalidate_prefix(cache_keys::LANGUAGES);
        tracing::info!("[LanguageService] {}", message);
        self.notifier.notify(Notice::success(message));
    }
}

fn refuse(field: &str, message: &str) -> ShopdeskError {
    ValidationErrors::from(vec![FieldError::new(field, message)]).into()
}
