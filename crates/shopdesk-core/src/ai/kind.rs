use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AiKind {
    Description,
    Seo,
    AltText,
    Faq,
    Testimonials,
    Hero,
    Features,
    FooterTranslation,
    Attributes,
    VariantOptions,
    VariantValues,
    Translation,
}

impl AiKind {
    /// Route relative to the API base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Description => "/admin/ai/generate-description",
            Self::Seo => "/admin/ai/generate-seo",
            Self::AltText => "/admin/ai/generate-alt-text",
            Self::Faq => "/admin/ai/generate-faq",
            Self::Testimonials => "/admin/ai/generate-testimonials",
            Self::Hero => "/admin/ai/generate-hero",
            Self::Features => "/admin/ai/generate-features",
            Self::FooterTranslation => "/admin/ai/translate-footer",
            Self::Attributes => "/admin/ai/suggest-attributes",
            Self::VariantOptions => "/admin/ai/suggest-variant-options",
            Self::VariantValues => "/admin/ai/suggest-variant-values",
            Self::Translation => "/admin/ai/translate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_endpoints_are_unique() {
        let endpoints: HashSet<_> = AiKind::iter().map(AiKind::endpoint).collect();
        assert_eq!(endpoints.len(), AiKind::iter().count());
        assert!(endpoints.iter().all(|e| e.starts_with("/admin/ai/")));
    }

    #[test]
    fn test_kebab_case_names() {
        assert_eq!(AiKind::AltText.to_string(), "alt-text");
        assert_eq!(AiKind::from_str("variant-values").unwrap(), AiKind::VariantValues);
    }
}
