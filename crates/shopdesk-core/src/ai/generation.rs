use serde::{Deserialize, Serialize};

use super::content::*;
use super::kind::AiKind;
use super::request::*;
use crate::error::Result;
use crate::serde_ext::lenient_f64;
use crate::validation::{Checks, Validate, ValidationErrors};

/// Billing metadata attached to every generation response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiUsage {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cost: f64,
    #[serde(default)]
    pub tokens_used: u64,
    #[serde(default)]
    pub provider: String,
}

/// A request type that knows which result type it produces.
pub trait AiPrompt: Into<AiRequest> {
    type Output: AiPayload;
}

/// A result type that can be recovered from [`AiContent`].
pub trait AiPayload: Sized {
    const KIND: AiKind;

    fn from_content(content: AiContent) -> Option<Self>;
}

macro_rules! ai_kinds {
    ($($variant:ident => $request:ident, $content:ident;)*) => {
        /// One generation request, tagged by kind.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum AiRequest {
            $($variant($request),)*
        }

        impl AiRequest {
            pub fn kind(&self) -> AiKind {
                match self {
                    $(Self::$variant(_) => AiKind::$variant,)*
                }
            }
        }

        /// One generation result, tagged by kind.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind", content = "content", rename_all = "kebab-case")]
        pub enum AiContent {
            $($variant($content),)*
        }

        impl AiContent {
            pub fn kind(&self) -> AiKind {
                match self {
                    $(Self::$variant(_) => AiKind::$variant,)*
                }
            }

            /// Decodes a response body using the struct that belongs to `kind`.
            pub fn decode(kind: AiKind, value: serde_json::Value) -> Result<Self> {
                Ok(match kind {
                    $(AiKind::$variant => Self::$variant(serde_json::from_value(value)?),)*
                })
            }
        }

        $(
            impl From<$request> for AiRequest {
                fn from(request: $request) -> Self {
                    Self::$variant(request)
                }
            }

            impl AiPrompt for $request {
                type Output = $content;
            }

            impl AiPayload for $content {
                const KIND: AiKind = AiKind::$variant;

                fn from_content(content: AiContent) -> Option<Self> {
                    match content {
                        AiContent::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

ai_kinds! {
    Description => DescriptionRequest, DescriptionContent;
    Seo => SeoRequest, SeoContent;
    AltText => AltTextRequest, AltTextContent;
    Faq => FaqRequest, FaqContent;
    Testimonials => TestimonialsRequest, TestimonialsContent;
    Hero => HeroRequest, HeroContent;
    Features => FeaturesRequest, FeaturesContent;
    FooterTranslation => FooterTranslationRequest, FooterTranslationContent;
    Attributes => AttributesRequest, AttributesContent;
    VariantOptions => VariantOptionsRequest, VariantOptionsContent;
    VariantValues => VariantValuesRequest, VariantValuesContent;
    Translation => TranslationRequest, TranslationContent;
}

impl Validate for AiRequest {
    fn validate(&self) -> ValidationErrors {
        let mut checks = Checks::new();
        match self {
            Self::Description(r) => {
                checks.required("product_name", "Product name", &r.product_name);
                if let Some(max) = r.max_length {
                    checks.in_range("max_length", "Maximum length", max as i64, 50, 5000);
                }
            }
            Self::Seo(r) => {
                checks.required("product_name", "Product name", &r.product_name);
            }
            Self::AltText(r) => {
                checks.required("image_url", "Image URL", &r.image_url);
            }
            Self::Faq(r) => {
                checks
                    .required("product_name", "Product name", &r.product_name)
                    .in_range("count", "Number of questions", r.count as i64, 1, 20);
            }
            Self::Testimonials(r) => {
                checks
                    .required("product_name", "Product name", &r.product_name)
                    .in_range("count", "Number of testimonials", r.count as i64, 1, 10);
            }
            Self::Hero(r) => {
                checks.required("store_name", "Store name", &r.store_name);
            }
            Self::Features(r) => {
                checks
                    .required("product_name", "Product name", &r.product_name)
                    .in_range("count", "Number of features", r.count as i64, 1, 12);
            }
            Self::FooterTranslation(r) => {
                checks
                    .required("source_language", "Source language", &r.source_language)
                    .required("target_language", "Target language", &r.target_language);
                if r.source_language == r.target_language {
                    checks.custom(
                        "target_language",
                        "Target language must differ from the source language",
                    );
                }
            }
            Self::Attributes(r) => {
                checks.required("product_name", "Product name", &r.product_name);
            }
            Self::VariantOptions(r) => {
                checks.required("product_name", "Product name", &r.product_name);
            }
            Self::VariantValues(r) => {
                checks
                    .required("product_name", "Product name", &r.product_name)
                    .required("option_name", "Option name", &r.option_name);
            }
            Self::Translation(r) => {
                checks
                    .required("source_language", "Source language", &r.source_language)
                    .required("target_language", "Target language", &r.target_language);
                if r.source_language == r.target_language {
                    checks.custom(
                        "target_language",
                        "Target language must differ from the source language",
                    );
                }
            }
        }
        checks.finish()
    }
}

/// A decoded generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiGeneration {
    pub content: AiContent,
    pub usage: AiUsage,
}

impl AiGeneration {
    /// Splits a flat response body (`{ ...content, cost, tokensUsed, provider }`)
    /// into typed content and usage.
    pub fn decode(kind: AiKind, value: serde_json::Value) -> Result<Self> {
        let usage: AiUsage = serde_json::from_value(value.clone())?;
        let content = AiContent::decode(kind, value)?;
        Ok(Self { content, usage })
    }

    pub fn kind(&self) -> AiKind {
        self.content.kind()
    }

    /// Extracts the typed payload; `None` if `T` belongs to another kind.
    pub fn into_payload<T: AiPayload>(self) -> Option<(T, AiUsage)> {
        let usage = self.usage;
        T::from_content(self.content).map(|payload| (payload, usage))
    }
}
