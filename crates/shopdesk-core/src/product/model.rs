use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::PageMeta;
use crate::serde_ext::{lenient_f64, lenient_opt_f64};
use crate::validation::{Checks, SLUG_PATTERN, Validate, ValidationErrors};

pub const NAME_MAX: usize = 255;
pub const SKU_MAX: usize = 100;
pub const META_TITLE_MAX: usize = 60;
pub const META_DESCRIPTION_MAX: usize = 160;

/// A product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Image attached to a create/update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Guessed from the file name when absent.
    pub content_type: Option<String>,
}

/// Draft of the product form, used for both create and update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: String,
    pub short_description: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub stock_quantity: i64,
    pub category_id: Option<i64>,
    pub is_active: bool,
    pub is_featured: bool,
    pub image_alt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(skip)]
    pub image: Option<ProductImage>,
}

impl ProductInput {
    /// Pre-fills the edit form from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
            sku: product.sku.clone(),
            description: product.description.clone(),
            short_description: product.short_description.clone(),
            price: product.price,
            sale_price: product.sale_price,
            stock_quantity: product.stock_quantity,
            category_id: product.category_id,
            is_active: product.is_active,
            is_featured: product.is_featured,
            image_alt: product.image_alt.clone(),
            meta_title: product.meta_title.clone(),
            meta_description: product.meta_description.clone(),
            image: None,
        }
    }

    /// Text fields as sent in a multipart body. Absent optionals are omitted.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("slug", self.slug.clone()),
            ("sku", self.sku.clone()),
            ("description", self.description.clone()),
            ("shortDescription", self.short_description.clone()),
            ("price", self.price.to_string()),
            ("stockQuantity", self.stock_quantity.to_string()),
            ("isActive", self.is_active.to_string()),
            ("isFeatured", self.is_featured.to_string()),
        ];
        if let Some(sale_price) = self.sale_price {
            fields.push(("salePrice", sale_price.to_string()));
        }
        if let Some(category_id) = self.category_id {
            fields.push(("categoryId", category_id.to_string()));
        }
        if let Some(alt) = &self.image_alt {
            fields.push(("imageAlt", alt.clone()));
        }
        if let Some(title) = &self.meta_title {
            fields.push(("metaTitle", title.clone()));
        }
        if let Some(description) = &self.meta_description {
            fields.push(("metaDescription", description.clone()));
        }
        fields
    }
}

impl Validate for ProductInput {
    fn validate(&self) -> ValidationErrors {
        let mut checks = Checks::new();
        checks
            .required("name", "Name", &self.name)
            .max_len("name", "Name", &self.name, NAME_MAX)
            .required("sku", "SKU", &self.sku)
            .max_len("sku", "SKU", &self.sku, SKU_MAX)
            .pattern(
                "slug",
                "Slug",
                &self.slug,
                &SLUG_PATTERN,
                "may only contain lowercase letters, digits and hyphens",
            )
            .at_least("price", "Price", self.price, 0.0)
            .at_least("stock_quantity", "Stock quantity", self.stock_quantity as f64, 0.0)
            .optional_max_len(
                "meta_title",
                "Meta title",
                self.meta_title.as_deref(),
                META_TITLE_MAX,
            )
            .optional_max_len(
                "meta_description",
                "Meta description",
                self.meta_description.as_deref(),
                META_DESCRIPTION_MAX,
            );

        if let Some(sale_price) = self.sale_price {
            checks
                .at_least("sale_price", "Sale price", sale_price, 0.0)
                .less_than("sale_price", "Sale price", sale_price, "regular price", self.price);
        }

        checks.finish()
    }
}

/// Filters for the product list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
            category_id: None,
            is_active: None,
        }
    }
}

/// One page of the product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub meta: Option<PageMeta>,
}
