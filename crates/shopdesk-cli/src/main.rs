use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use commands::ai::AiAction;
use commands::config::ConfigAction;
use commands::languages::LanguageAction;
use commands::products::ProductAction;
use commands::translations::TranslationAction;

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(about = "Shopdesk CLI - storefront administration from the terminal", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, env = "SHOPDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalogue
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage storefront languages
    Languages {
        #[command(subcommand)]
        action: LanguageAction,
    },
    /// Inspect and edit product translations
    Translations {
        #[command(subcommand)]
        action: TranslationAction,
    },
    /// Generate content with the AI endpoints
    Ai {
        #[command(subcommand)]
        action: AiAction,
    },
    /// Show or initialise the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `RUST_LOG` wins; otherwise the verbosity flags pick the level.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so command output stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config_path = cli.config;
    match cli.command {
        Commands::Config { action } => commands::config::run(config_path, action)?,
        Commands::Products { action } => {
            let app = app::App::load(config_path, false)?;
            commands::products::run(&app, action).await?
        }
        Commands::Languages { action } => {
            let assume_yes = matches!(action, LanguageAction::Delete { yes: true, .. });
            let app = app::App::load(config_path, assume_yes)?;
            commands::languages::run(&app, action).await?
        }
        Commands::Translations { action } => {
            let app = app::App::load(config_path, false)?;
            commands::translations::run(&app, action).await?
        }
        Commands::Ai { action } => {
            let app = app::App::load(config_path, false)?;
            commands::ai::run(&app, action).await?
        }
    }

    Ok(())
}
