//! Auto-saving editor for the per-language storefront footer.

use async_trait::async_trait;
use shopdesk_core::ai::FooterTranslationRequest;
use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::footer::{Footer, FooterApi};
use shopdesk_core::ports::ConfirmationPrompt;
use shopdesk_core::session::SaveStatus;
use shopdesk_core::validation::Validate;
use std::sync::Arc;

use crate::ai_service::AiContentService;
use crate::autosave::{AutoSaveController, DraftSaver, SaveOutcome};
use crate::context::EditorContext;

struct FooterSaver {
    api: Arc<dyn FooterApi>,
}

#[async_trait]
impl DraftSaver<Footer> for FooterSaver {
    async fn save(&self, draft: &Footer) -> Result<Footer> {
        draft.check()?;
        self.api.save(draft).await
    }
}

pub struct FooterEditor {
    api: Arc<dyn FooterApi>,
    context: EditorContext,
    controller: AutoSaveController<Footer>,
}

impl FooterEditor {
    /// Loads the footer for `language_code`; a language without one opens
    /// an empty footer.
    pub async fn open(
        api: Arc<dyn FooterApi>,
        context: EditorContext,
        language_code: &str,
    ) -> Result<Self> {
        let baseline = Self::load(api.as_ref(), language_code).await?;
        let controller = AutoSaveController::new(
            format!("footer {}", language_code),
            baseline,
            Arc::new(FooterSaver {
                api: Arc::clone(&api),
            }),
            Arc::clone(&context.scheduler),
            Arc::clone(&context.notifier),
            context.settings,
        );
        Ok(Self {
            api,
            context,
            controller,
        })
    }

    async fn load(api: &dyn FooterApi, language_code: &str) -> Result<Footer> {
        Ok(api
            .get(language_code)
            .await?
            .unwrap_or_else(|| Footer::empty(language_code)))
    }

    pub fn language_code(&self) -> String {
        self.controller.baseline().language_code
    }

    pub fn draft(&self) -> Footer {
        self.controller.draft()
    }

    pub fn status(&self) -> SaveStatus {
        self.controller.status()
    }

    pub fn is_dirty(&self) -> bool {
        self.controller.is_dirty()
    }

    pub fn controller(&self) -> &AutoSaveController<Footer> {
        &self.controller
    }

    pub fn edit<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut Footer),
    {
        self.controller.edit(f)
    }

    pub async fn save_now(&self) -> SaveOutcome {
        self.controller.save_now().await
    }

    /// Switches to another language. Returns `Ok(false)` when the user
    /// declined to discard unsaved edits.
    pub async fn switch_language(&self, language_code: &str) -> Result<bool> {
        if self.controller.is_dirty() {
            let prompt = ConfirmationPrompt::new(
                "Discard unsaved changes?",
                format!(
                    "The {} footer has changes that are not saved yet.",
                    self.language_code()
                ),
            )
            .with_consequence("Edits made since the last save will be lost");
            if !self.context.confirmer.confirm(&prompt).await {
                return Ok(false);
            }
        }

        let baseline = Self::load(self.api.as_ref(), language_code).await?;
        self.controller.reset(baseline);
        tracing::info!("[FooterEditor] Switched to {}", language_code);
        Ok(true)
    }

    /// Replaces the draft with an AI translation of the `source_language`
    /// footer. The result is auto-saved like a manual edit.
    pub async fn translate_from(
        &self,
        ai: &AiContentService,
        source_language: &str,
    ) -> Result<bool> {
        let target_language = self.language_code();
        let source = self
            .api
            .get(source_language)
            .await?
            .ok_or_else(|| ShopdeskError::not_found("Footer", source_language))?;

        let (content, _) = ai
            .generate(FooterTranslationRequest {
                footer: source,
                source_language: source_language.to_string(),
                target_language: target_language.clone(),
            })
            .await?;

        let mut translated = content.footer;
        translated.language_code = target_language;
        Ok(self.controller.replace_draft(translated))
    }

    pub fn close(&self) -> bool {
        self.controller.close()
    }
}

impl Drop for FooterEditor {
    fn drop(&mut self) {
        self.controller.close();
    }
}
