//! Application layer for Shopdesk.
//!
//! Use cases that coordinate the core domain with injected ports: the
//! auto-save controller and the editors built on it, validated form
//! services, and the AI content service.

pub mod ai_service;
pub mod autosave;
pub mod cache_keys;
pub mod cms_service;
pub mod context;
pub mod footer_editor;
pub mod language_service;
pub mod product_service;
pub mod translation_editor;

#[cfg(test)]
mod test_support;

pub use ai_service::AiContentService;
pub use autosave::{AutoSaveController, DraftSaver, SaveOutcome};
pub use cms_service::CmsService;
pub use context::EditorContext;
pub use footer_editor::FooterEditor;
pub use language_service::LanguageService;
pub use product_service::ProductFormService;
pub use translation_editor::TranslationEditor;
