use anyhow::Result;
use clap::Subcommand;
use shopdesk_core::product::ProductQuery;

use super::utils::print_json;
use crate::app::App;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List one page of products
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Free-text search on name and SKU
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<i64>,
    },
    /// Show a single product
    Show { id: i64 },
}

pub async fn run(app: &App, action: ProductAction) -> Result<()> {
    let service = app.products();
    match action {
        ProductAction::List {
            page,
            limit,
            search,
            category,
        } => {
            let query = ProductQuery {
                page,
                limit,
                search,
                category_id: category,
                is_active: None,
            };
            let page = service.list(&query).await?;
            print_json(&page)?;
        }
        ProductAction::Show { id } => {
            print_json(&service.get(id).await?)?;
        }
    }
    Ok(())
}
