//! AI content generation payloads.
//!
//! Every generation kind has its own request struct and its own result
//! struct. [`AiRequest`] and [`AiContent`] wrap them as tagged variants so a
//! result can never be confused with another kind's payload.

mod api;
mod bulk;
mod content;
mod generation;
mod kind;
mod request;

pub use api::AiApi;
pub use bulk::{BULK_LIMIT, BulkItemResult, BulkOperationKind, BulkOperationReport, BulkOperationRequest};
pub use content::{
    AltTextContent, AttributesContent, DescriptionContent, FaqContent, FaqItem, FeatureItem,
    FeaturesContent, FooterTranslationContent, HeroContent, OptionSuggestion, SeoContent,
    Testimonial, TestimonialsContent, TranslationContent, VariantOptionsContent,
    VariantValuesContent,
};
pub use generation::{AiContent, AiGeneration, AiPayload, AiPrompt, AiRequest, AiUsage};
pub use kind::AiKind;
pub use request::{
    AltTextRequest, AttributesRequest, DescriptionRequest, FaqRequest, FeaturesRequest,
    FooterTranslationRequest, HeroRequest, SeoRequest, TestimonialsRequest, Tone,
    TranslationFields, TranslationRequest, VariantOptionsRequest, VariantValuesRequest,
};
