//! Product catalogue domain.

mod api;
mod model;

pub use api::ProductApi;
pub use model::{
    META_DESCRIPTION_MAX, META_TITLE_MAX, NAME_MAX, Product, ProductImage, ProductInput,
    ProductPage, ProductQuery, SKU_MAX,
};
