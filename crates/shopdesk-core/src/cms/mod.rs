//! CMS pages and reusable content blocks.

mod api;
mod model;

pub use api::CmsApi;
pub use model::{CmsBlock, CmsBlockInput, CmsPage, CmsPageInput};
