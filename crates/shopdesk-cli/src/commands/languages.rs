use anyhow::Result;
use clap::Subcommand;

use super::utils::print_json;
use crate::app::App;

#[derive(Subcommand)]
pub enum LanguageAction {
    /// List languages
    List {
        /// Include disabled languages
        #[arg(long)]
        all: bool,
    },
    /// Enable or disable a language
    Toggle { code: String },
    /// Delete a language and everything stored for it
    Delete {
        code: String,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(app: &App, action: LanguageAction) -> Result<()> {
    let service = app.languages();
    match action {
        LanguageAction::List { all } => {
            print_json(&service.list(all).await?)?;
        }
        LanguageAction::Toggle { code } => {
            print_json(&service.toggle(&code).await?)?;
        }
        LanguageAction::Delete { code, .. } => {
            if service.delete(&code).await? {
                println!("Deleted {}", code);
            } else {
                println!("Cancelled");
            }
        }
    }
    Ok(())
}
