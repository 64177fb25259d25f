use anyhow::{Result, bail};
use clap::Subcommand;
use shopdesk_application::{SaveOutcome, TranslationEditor};
use std::sync::Arc;

use super::utils::print_json;
use crate::app::App;

#[derive(Subcommand)]
pub enum TranslationAction {
    /// Show the translation of a product (empty when none exists)
    Show { product_id: i64, language: String },
    /// Show how complete a translation is
    Status { product_id: i64, language: String },
    /// Set one field and save immediately
    Set {
        product_id: i64,
        language: String,
        /// Field name, e.g. `name` or `metaTitle`
        field: String,
        value: String,
    },
}

async fn open(app: &App, product_id: i64, language: &str) -> Result<TranslationEditor> {
    Ok(TranslationEditor::open(
        Arc::clone(&app.api.translations),
        app.context.clone(),
        product_id,
        language,
    )
    .await?)
}

pub async fn run(app: &App, action: TranslationAction) -> Result<()> {
    match action {
        TranslationAction::Show {
            product_id,
            language,
        } => {
            let editor = open(app, product_id, &language).await?;
            print_json(&editor.draft())?;
        }
        TranslationAction::Status {
            product_id,
            language,
        } => {
            let editor = open(app, product_id, &language).await?;
            print_json(&editor.completion().await?)?;
        }
        TranslationAction::Set {
            product_id,
            language,
            field,
            value,
        } => {
            let editor = open(app, product_id, &language).await?;
            if !editor.set_field(&field, &value)? {
                println!("Unchanged");
                return Ok(());
            }
            match editor.save_now().await {
                SaveOutcome::Saved => print_json(&editor.draft())?,
                SaveOutcome::Failed(err) => return Err(err.into()),
                other => bail!("Translation was not saved: {:?}", other),
            }
        }
    }
    Ok(())
}
