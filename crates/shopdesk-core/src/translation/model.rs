use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::product::{META_DESCRIPTION_MAX, META_TITLE_MAX, NAME_MAX};
use crate::serde_ext::lenient_f64;
use crate::validation::{Checks, SLUG_PATTERN, Validate, ValidationErrors};

/// The draft edited by the translation editor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTranslation {
    pub product_id: i64,
    pub language_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
}

impl ProductTranslation {
    /// Blank translation used when the server has none yet.
    pub fn empty(product_id: i64, language_code: impl Into<String>) -> Self {
        Self {
            product_id,
            language_code: language_code.into(),
            ..Default::default()
        }
    }

    /// True when every translatable field is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.name,
            &self.slug,
            &self.description,
            &self.short_description,
            &self.meta_title,
            &self.meta_description,
        ]
        .iter()
        .all(|value| value.trim().is_empty())
    }

    /// Sets a field by its wire name. Returns false for unknown fields.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "slug" => &mut self.slug,
            "description" => &mut self.description,
            "shortDescription" | "short_description" => &mut self.short_description,
            "metaTitle" | "meta_title" => &mut self.meta_title,
            "metaDescription" | "meta_description" => &mut self.meta_description,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

impl Validate for ProductTranslation {
    fn validate(&self) -> ValidationErrors {
        Checks::new()
            .required("name", "Name", &self.name)
            .max_len("name", "Name", &self.name, NAME_MAX)
            .pattern(
                "slug",
                "Slug",
                &self.slug,
                &SLUG_PATTERN,
                "may only contain lowercase letters, digits and hyphens",
            )
            .max_len("meta_title", "Meta title", &self.meta_title, META_TITLE_MAX)
            .max_len(
                "meta_description",
                "Meta description",
                &self.meta_description,
                META_DESCRIPTION_MAX,
            )
            .finish()
    }
}

/// Server-computed completeness of one product/language pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStatus {
    pub product_id: i64,
    pub language_code: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub completion_percentage: f64,
    /// Field name to "has a value".
    #[serde(default)]
    pub fields: BTreeMap<String, bool>,
}

impl TranslationStatus {
    pub fn is_complete(&self) -> bool {
        self.completion_percentage >= 100.0
    }

    pub fn missing_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, populated)| !**populated)
            .map(|(field, _)| field.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_accepts_both_spellings() {
        let mut translation = ProductTranslation::empty(1, "de");
        assert!(translation.is_blank());
        assert!(translation.set_field("metaTitle", "Leinenhemd"));
        assert!(translation.set_field("short_description", "Kurz"));
        assert!(!translation.set_field("price", "10"));
        assert_eq!(translation.meta_title, "Leinenhemd");
        assert_eq!(translation.short_description, "Kurz");
        assert!(!translation.is_blank());
    }

    #[test]
    fn test_name_is_required() {
        let translation = ProductTranslation::empty(1, "fr");
        assert!(translation.validate().has_field("name"));
    }

    #[test]
    fn test_status_missing_fields() {
        let status: TranslationStatus = serde_json::from_str(
            r#"{
                "productId": 9,
                "languageCode": "es",
                "completionPercentage": "50",
                "fields": { "name": true, "description": false, "metaTitle": true, "metaDescription": false }
            }"#,
        )
        .unwrap();
        assert!(!status.is_complete());
        assert_eq!(status.missing_fields(), vec!["description", "metaDescription"]);
    }
}
