//! Per-language product translations.

mod api;
mod model;

pub use api::TranslationApi;
pub use model::{ProductTranslation, TranslationStatus};
