use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::app::open_storage;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (file plus environment)
    Show,
    /// Print the path of the configuration file
    Path,
    /// Write a default configuration file if none exists
    Init,
}

pub fn run(config_path: Option<PathBuf>, action: ConfigAction) -> Result<()> {
    let storage = open_storage(config_path)?;
    match action {
        ConfigAction::Show => {
            let mut config = storage.load()?;
            if config.api.token.is_some() {
                config.api.token = Some("********".to_string());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => println!("{}", storage.path().display()),
        ConfigAction::Init => {
            if storage.init()? {
                println!("Created {}", storage.path().display());
            } else {
                println!("{} already exists", storage.path().display());
            }
        }
    }
    Ok(())
}
