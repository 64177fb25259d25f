use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::product::{META_DESCRIPTION_MAX, META_TITLE_MAX};
use crate::validation::{Checks, SLUG_PATTERN, Validate, ValidationErrors};

/// Block identifiers are referenced from templates: `home_hero`, `footer-promo`.
static BLOCK_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("identifier pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsPage {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsPageInput {
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub is_published: bool,
}

impl CmsPageInput {
    pub fn from_page(page: &CmsPage) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            content: page.content.clone(),
            meta_title: page.meta_title.clone(),
            meta_description: page.meta_description.clone(),
            is_published: page.is_published,
        }
    }
}

impl Validate for CmsPageInput {
    fn validate(&self) -> ValidationErrors {
        let mut checks = Checks::new();
        checks
            .required("title", "Title", &self.title)
            .max_len("title", "Title", &self.title, 200)
            .required("slug", "Slug", &self.slug)
            .pattern(
                "slug",
                "Slug",
                &self.slug,
                &SLUG_PATTERN,
                "may only contain lowercase letters, digits and hyphens",
            )
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
        // A published page needs a body.
        if self.is_published {
            checks.required("content", "Content", &self.content);
        }
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsBlock {
    pub id: i64,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsBlockInput {
    pub identifier: String,
    pub title: String,
    pub content: String,
    pub is_active: bool,
}

impl CmsBlockInput {
    pub fn from_block(block: &CmsBlock) -> Self {
        Self {
            identifier: block.identifier.clone(),
            title: block.title.clone(),
            content: block.content.clone(),
            is_active: block.is_active,
        }
    }
}

impl Validate for CmsBlockInput {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .required("identifier", "Identifier", &self.identifier)
            .max_len("identifier", "Identifier", &self.identifier, 100)
            .pattern(
                "identifier",
                "Identifier",
                &self.identifier,
                &BLOCK_IDENTIFIER,
                "must start with a letter and use lowercase letters, digits, `_` or `-`",
            )
            .required("title", "Title", &self.title)
            .max_len("title", "Title", &self.title, 200)
            .required("content", "Content", &self.content)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_page_requires_content() {
        let mut page = CmsPageInput {
            slug: "about-us".to_string(),
            title: "About us".to_string(),
            ..Default::default()
        };
        assert!(page.validate().is_empty());

        page.is_published = true;
        assert!(page.validate().has_field("content"));
    }

    #[test]
    fn test_block_identifier() {
        let mut block = CmsBlockInput {
            identifier: "home_hero".to_string(),
            title: "Hero".to_string(),
            content: "<h1>Hi</h1>".to_string(),
            is_active: true,
        };
        assert!(block.validate().is_empty());

        block.identifier = "1hero".to_string();
        assert!(block.validate().has_field("identifier"));
    }
}
