use anyhow::Result;
use clap::Subcommand;
use shopdesk_core::ai::{
    AiRequest, AltTextRequest, BulkOperationKind, BulkOperationRequest, DescriptionRequest,
    SeoRequest, Tone,
};

use super::utils::print_json;
use crate::app::App;

#[derive(Subcommand)]
pub enum AiAction {
    /// Generate a product description
    Description {
        #[arg(long)]
        product_name: String,
        #[arg(long)]
        product_id: Option<i64>,
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated keywords
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
        /// professional, friendly, luxury, playful or technical
        #[arg(long)]
        tone: Option<Tone>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        max_length: Option<u32>,
    },
    /// Generate meta title, meta description and keywords
    Seo {
        #[arg(long)]
        product_name: String,
        #[arg(long)]
        product_id: Option<i64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Generate alt text for an image
    AltText {
        #[arg(long)]
        image_url: String,
        #[arg(long)]
        product_name: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Run one operation over many products
    Bulk {
        /// generate-descriptions, generate-seo, generate-alt-text or translate
        #[arg(long)]
        operation: BulkOperationKind,
        /// Comma-separated product ids
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
        /// Target language (required for translate)
        #[arg(long)]
        language: Option<String>,
        /// Replace existing content
        #[arg(long)]
        overwrite: bool,
    },
}

pub async fn run(app: &App, action: AiAction) -> Result<()> {
    let service = app.ai();
    let request: AiRequest = match action {
        AiAction::Bulk {
            operation,
            ids,
            language,
            overwrite,
        } => {
            let report = service
                .bulk(&BulkOperationRequest {
                    operation,
                    product_ids: ids,
                    language,
                    overwrite,
                })
                .await?;
            return print_json(&report);
        }
        AiAction::Description {
            product_name,
            product_id,
            category,
            keywords,
            tone,
            language,
            max_length,
        } => DescriptionRequest {
            product_id,
            product_name,
            category,
            keywords,
            tone,
            language,
            max_length,
        }
        .into(),
        AiAction::Seo {
            product_name,
            product_id,
            description,
            keywords,
            language,
        } => SeoRequest {
            product_id,
            product_name,
            description,
            keywords,
            language,
        }
        .into(),
        AiAction::AltText {
            image_url,
            product_name,
            language,
        } => AltTextRequest {
            image_url,
            product_name,
            language,
        }
        .into(),
    };

    let generation = service.generate_request(request).await?;
    print_json(&generation)
}
