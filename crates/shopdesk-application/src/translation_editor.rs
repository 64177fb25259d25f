//! Auto-saving editor for one product translation.
//!
//! The editor holds a single [`AutoSaveController`] whose draft is a
//! [`ProductTranslation`]. Switching to another language or product reuses
//! the controller, asking for confirmation first when there are unsaved
//! edits.

use async_trait::async_trait;
use shopdesk_core::ai::TranslationFields;
use shopdesk_core::error::Result;
use shopdesk_core::ports::{ConfirmationPrompt, QueryCache};
use shopdesk_core::session::SaveStatus;
use shopdesk_core::translation::{ProductTranslation, TranslationApi, TranslationStatus};
use shopdesk_core::validation::{FieldError, Validate, ValidationErrors};
use std::sync::Arc;

use crate::autosave::{AutoSaveController, DraftSaver, SaveOutcome};
use crate::cache_keys;
use crate::context::EditorContext;

/// Validates, saves, and drops the cached completion status.
struct TranslationSaver {
    api: Arc<dyn TranslationApi>,
    cache: Arc<dyn QueryCache>,
}

#[async_trait]
impl DraftSaver<ProductTranslation> for TranslationSaver {
    async fn save(&self, draft: &ProductTranslation) -> Result<ProductTranslation> {
        draft.check()?;
        let saved = self.api.save(draft).await?;
        self.cache.invalidate(&cache_keys::translation_status(
            draft.product_id,
            &draft.language_code,
        ));
        Ok(saved)
    }
}

pub struct TranslationEditor {
    api: Arc<dyn TranslationApi>,
    context: EditorContext,
    controller: AutoSaveController<ProductTranslation>,
}

impl TranslationEditor {
    /// Loads the translation of `product_id` into `language_code`. A missing
    /// translation (404) opens an empty draft.
    pub async fn open(
        api: Arc<dyn TranslationApi>,
        context: EditorContext,
        product_id: i64,
        language_code: &str,
    ) -> Result<Self> {
        let baseline = Self::load(api.as_ref(), product_id, language_code).await?;
        let saver = Arc::new(TranslationSaver {
            api: Arc::clone(&api),
            cache: Arc::clone(&context.cache),
        });
        let controller = AutoSaveController::new(
            format!("translation {}/{}", product_id, language_code),
            baseline,
            saver,
            Arc::clone(&context.scheduler),
            Arc::clone(&context.notifier),
            context.settings,
        );

        tracing::info!(
            "[TranslationEditor] Opened product {} in {}",
            product_id,
            language_code
        );
        Ok(Self {
            api,
            context,
            controller,
        })
    }

    async fn load(
        api: &dyn TranslationApi,
        product_id: i64,
        language_code: &str,
    ) -> Result<ProductTranslation> {
        Ok(api
            .get(product_id, language_code)
            .await?
            .unwrap_or_else(|| ProductTranslation::empty(product_id, language_code)))
    }

    pub fn product_id(&self) -> i64 {
        self.controller.baseline().product_id
    }

    pub fn language_code(&self) -> String {
        self.controller.baseline().language_code
    }

    pub fn draft(&self) -> ProductTranslation {
        self.controller.draft()
    }

    pub fn status(&self) -> SaveStatus {
        self.controller.status()
    }

    pub fn is_dirty(&self) -> bool {
        self.controller.is_dirty()
    }

    pub fn controller(&self) -> &AutoSaveController<ProductTranslation> {
        &self.controller
    }

    /// Sets one field by its wire name (`name`, `metaTitle`, ...).
    pub fn set_field(&self, field: &str, value: &str) -> Result<bool> {
        let mut known = true;
        let dirty = self.controller.edit(|draft| {
            known = draft.set_field(field, value);
        });
        if !known {
            return Err(ValidationErrors::from(vec![FieldError::new(
                field,
                "Unknown translation field",
            )])
            .into());
        }
        Ok(dirty)
    }

    pub fn edit<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut ProductTranslation),
    {
        self.controller.edit(f)
    }

    /// Fills the draft with AI output; blank generated fields keep the
    /// current text. The result is auto-saved like any other edit.
    pub fn apply_ai_translation(&self, fields: &TranslationFields) -> bool {
        self.controller.edit(|draft| fields.apply_to(draft))
    }

    pub async fn save_now(&self) -> SaveOutcome {
        self.controller.save_now().await
    }

    /// Completion status, read through the query cache.
    pub async fn completion(&self) -> Result<TranslationStatus> {
        let product_id = self.product_id();
        let language_code = self.language_code();
        let key = cache_keys::translation_status(product_id, &language_code);
        let api = Arc::clone(&self.api);
        cache_keys::cached(self.context.cache.as_ref(), &key, || async move {
            api.status(product_id, &language_code).await
        })
        .await
    }

    /// Switches to another language of the same product.
    ///
    /// Returns `Ok(false)` when the user declined to discard unsaved edits.
    pub async fn switch_language(&self, language_code: &str) -> Result<bool> {
        self.switch_to(self.product_id(), language_code).await
    }

    /// Switches to another product, keeping the current language.
    pub async fn switch_product(&self, product_id: i64) -> Result<bool> {
        let language_code = self.language_code();
        self.switch_to(product_id, &language_code).await
    }

    async fn switch_to(&self, product_id: i64, language_code: &str) -> Result<bool> {
        if self.controller.is_dirty() && !self.confirm_discard().await {
            tracing::debug!("[TranslationEditor] Switch cancelled by user");
            return Ok(false);
        }

        let baseline = Self::load(self.api.as_ref(), product_id, language_code).await?;
        self.controller.reset(baseline);
        tracing::info!(
            "[TranslationEditor] Switched to product {} in {}",
            product_id,
            language_code
        );
        Ok(true)
    }

    async fn confirm_discard(&self) -> bool {
        let draft = self.controller.draft();
        let prompt = ConfirmationPrompt::new(
            "Discard unsaved changes?",
            format!(
                "The {} translation of product {} has changes that are not saved yet.",
                draft.language_code, draft.product_id
            ),
        )
        .with_consequence("Edits made since the last save will be lost");
        self.context.confirmer.confirm(&prompt).await
    }

    /// Closes the editor; an in-flight save completes but is discarded.
    pub fn close(&self) -> bool {
        self.controller.close()
    }
}

impl Drop for TranslationEditor {
    fn drop(&mut self) {
        self.controller.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_context;
    use shopdesk_core::error::ShopdeskError;
    use shopdesk_core::ports::NoticeLevel;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::sleep;

    // Mock TranslationApi backed by a map, with a switchable failure.
    #[derive(Default)]
    struct MockTranslationApi {
        stored: Mutex<HashMap<(i64, String), ProductTranslation>>,
        saves: Mutex<Vec<ProductTranslation>>,
        fail_with: Mutex<Option<ShopdeskError>>,
        status_calls: AtomicUsize,
    }

    impl MockTranslationApi {
        fn with(translation: ProductTranslation) -> Self {
            let api = Self::default();
            api.stored.lock().unwrap().insert(
                (translation.product_id, translation.language_code.clone()),
                translation,
            );
            api
        }

        fn saves(&self) -> Vec<ProductTranslation> {
            self.saves.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationApi for MockTranslationApi {
        async fn list(&self, product_id: i64) -> Result<Vec<ProductTranslation>> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .values()
                .filter(|t| t.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn get(
            &self,
            product_id: i64,
            language_code: &str,
        ) -> Result<Option<ProductTranslation>> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .get(&(product_id, language_code.to_string()))
                .cloned())
        }

        async fn save(&self, translation: &ProductTranslation) -> Result<ProductTranslation> {
            self.saves.lock().unwrap().push(translation.clone());
            let failure = self.fail_with.lock().unwrap().take();
            if let Some(err) = failure {
                return Err(err);
            }
            self.stored.lock().unwrap().insert(
                (translation.product_id, translation.language_code.clone()),
                translation.clone(),
            );
            Ok(translation.clone())
        }

        async fn delete(&self, product_id: i64, language_code: &str) -> Result<()> {
            self.stored
                .lock()
                .unwrap()
                .remove(&(product_id, language_code.to_string()));
            Ok(())
        }

        async fn status(&self, product_id: i64, language_code: &str) -> Result<TranslationStatus> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            let name_done = self
                .stored
                .lock()
                .unwrap()
                .get(&(product_id, language_code.to_string()))
                .map(|t| !t.name.is_empty())
                .unwrap_or(false);
            Ok(TranslationStatus {
                product_id,
                language_code: language_code.to_string(),
                completion_percentage: if name_done { 100.0 } else { 0.0 },
                fields: [("name".to_string(), name_done)].into_iter().collect(),
            })
        }
    }

    fn german(name: &str) -> ProductTranslation {
        ProductTranslation {
            name: name.to_string(),
            ..ProductTranslation::empty(4, "de")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_name_saves_once_with_new_value() {
        let api = Arc::new(MockTranslationApi::with(german("Old")));
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        editor.set_field("name", "New").unwrap();
        sleep(Duration::from_millis(1000)).await;
        editor.set_field("name", "Newer").unwrap();
        sleep(Duration::from_millis(3100)).await;

        let saves = api.saves();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].name, "Newer");
        assert_eq!(editor.status(), SaveStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_translation_opens_empty_draft() {
        let api = Arc::new(MockTranslationApi::default());
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api, ctx.context.clone(), 9, "fr")
            .await
            .unwrap();

        assert_eq!(editor.draft(), ProductTranslation::empty(9, "fr"));
        assert!(!editor.is_dirty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_http_500_keeps_form_data() {
        let api = Arc::new(MockTranslationApi::with(german("Old")));
        *api.fail_with.lock().unwrap() = Some(ShopdeskError::http(500, "Internal Server Error"));
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        editor.set_field("name", "New").unwrap();
        sleep(Duration::from_millis(3100)).await;

        assert_eq!(editor.draft().name, "New");
        assert_eq!(
            editor.status().error_message(),
            Some("Internal Server Error")
        );
        assert_eq!(ctx.notifier.levels(), vec![NoticeLevel::Error]);

        assert_eq!(editor.save_now().await, SaveOutcome::Saved);
        assert!(!editor.is_dirty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_draft_is_never_sent() {
        let api = Arc::new(MockTranslationApi::with(german("Old")));
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        editor.set_field("name", "").unwrap();
        sleep(Duration::from_millis(3100)).await;

        assert!(api.saves().is_empty());
        assert!(editor.status().is_error());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_field_is_rejected() {
        let api = Arc::new(MockTranslationApi::default());
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api, ctx.context.clone(), 1, "de")
            .await
            .unwrap();

        let err = editor.set_field("price", "10").unwrap_err();
        assert!(matches!(err, ShopdeskError::Validation(ref errors) if errors.has_field("price")));
        assert!(!editor.is_dirty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_is_cached_until_save() {
        let api = Arc::new(MockTranslationApi::with(german("")));
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        assert_eq!(editor.completion().await.unwrap().completion_percentage, 0.0);
        editor.completion().await.unwrap();
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 1);

        editor.set_field("name", "Leinenhemd").unwrap();
        assert_eq!(editor.save_now().await, SaveOutcome::Saved);

        assert!(editor.completion().await.unwrap().is_complete());
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_language_asks_when_dirty() {
        let api = Arc::new(MockTranslationApi::with(german("Hemd")));
        let ctx = test_context(false);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        editor.set_field("name", "Leinenhemd").unwrap();
        assert!(!editor.switch_language("fr").await.unwrap());
        assert_eq!(editor.language_code(), "de");
        assert_eq!(editor.draft().name, "Leinenhemd");
        assert_eq!(ctx.confirmer.prompts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_discards_pending_save() {
        let api = Arc::new(MockTranslationApi::with(german("Hemd")));
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        editor.set_field("name", "Leinenhemd").unwrap();
        assert!(editor.switch_product(5).await.unwrap());
        sleep(Duration::from_millis(5000)).await;

        assert!(api.saves().is_empty());
        assert_eq!(editor.product_id(), 5);
        assert_eq!(editor.draft(), ProductTranslation::empty(5, "de"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clean_switch_needs_no_confirmation() {
        let api = Arc::new(MockTranslationApi::with(german("Hemd")));
        let ctx = test_context(false);
        let editor = TranslationEditor::open(api, ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        assert!(editor.switch_language("fr").await.unwrap());
        assert!(ctx.confirmer.prompts().is_empty());
        assert_eq!(editor.language_code(), "fr");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ai_translation_marks_dirty() {
        let api = Arc::new(MockTranslationApi::with(german("Hemd")));
        let ctx = test_context(true);
        let editor = TranslationEditor::open(api.clone(), ctx.context.clone(), 4, "de")
            .await
            .unwrap();

        let fields = TranslationFields {
            name: "Leinenhemd".to_string(),
            description: "Luftiges Hemd aus Leinen.".to_string(),
            ..Default::default()
        };
        assert!(editor.apply_ai_translation(&fields));
        assert_eq!(editor.status(), SaveStatus::Debouncing);

        sleep(Duration::from_millis(3100)).await;
        assert_eq!(api.saves()[0].description, "Luftiges Hemd aus Leinen.");
    }
}
