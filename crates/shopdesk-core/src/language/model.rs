use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::{Checks, Validate, ValidationErrors};

/// `en`, `de`, or a regional variant such as `pt-BR`.
static LANGUAGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("language code pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_enabled() -> bool {
    true
}

impl Language {
    /// Label used in pickers: `Deutsch (de)`.
    pub fn display_label(&self) -> String {
        let name = if self.native_name.is_empty() {
            &self.name
        } else {
            &self.native_name
        };
        format!("{} ({})", name, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInput {
    pub code: String,
    pub name: String,
    pub native_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub is_default: bool,
    pub is_enabled: bool,
    pub sort_order: i32,
}

impl LanguageInput {
    pub fn from_language(language: &Language) -> Self {
        Self {
            code: language.code.clone(),
            name: language.name.clone(),
            native_name: language.native_name.clone(),
            flag: language.flag.clone(),
            is_default: language.is_default,
            is_enabled: language.is_enabled,
            sort_order: language.sort_order,
        }
    }
}

impl Validate for LanguageInput {
    fn validate(&self) -> ValidationErrors {
        let mut checks = Checks::new();
        checks
            .required("code", "Code", &self.code)
            .pattern(
                "code",
                "Code",
                &self.code,
                &LANGUAGE_CODE,
                "must look like `en` or `pt-BR`",
            )
            .required("name", "Name", &self.name)
            .max_len("name", "Name", &self.name, 100)
            .required("native_name", "Native name", &self.native_name)
            .max_len("native_name", "Native name", &self.native_name, 100)
            .in_range("sort_order", "Sort order", self.sort_order as i64, 0, 9999);

        if self.is_default && !self.is_enabled {
            checks.custom("is_enabled", "The default language cannot be disabled");
        }

        checks.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(code: &str) -> LanguageInput {
        LanguageInput {
            code: code.to_string(),
            name: "German".to_string(),
            native_name: "Deutsch".to_string(),
            is_enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_language_codes() {
        assert!(input("de").validate().is_empty());
        assert!(input("pt-BR").validate().is_empty());
        assert!(input("DE").validate().has_field("code"));
        assert!(input("deu").validate().has_field("code"));
        assert!(input("").validate().has_field("code"));
    }

    #[test]
    fn test_default_language_must_stay_enabled() {
        let mut lang = input("en");
        lang.is_default = true;
        lang.is_enabled = false;
        assert!(lang.validate().has_field("is_enabled"));
    }

    #[test]
    fn test_display_label_prefers_native_name() {
        let language: Language = serde_json::from_str(
            r#"{ "code": "de", "name": "German", "nativeName": "Deutsch" }"#,
        )
        .unwrap();
        assert!(language.is_enabled);
        assert_eq!(language.display_label(), "Deutsch (de)");
    }
}
