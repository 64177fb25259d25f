//! Per-language storefront footer.

mod api;
mod model;

pub use api::FooterApi;
pub use model::{Footer, FooterColumn, FooterLink};
