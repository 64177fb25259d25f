//! Storefront languages.

mod api;
mod model;

pub use api::LanguageApi;
pub use model::{Language, LanguageInput};
