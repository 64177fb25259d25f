//! Wiring of the REST endpoints and application services for one CLI run.

use anyhow::{Context, Result};
use shopdesk_application::{
    AiContentService, EditorContext, LanguageService, ProductFormService,
};
use shopdesk_core::config::ShopdeskConfig;
use shopdesk_infrastructure::{
    ApiServices, ConfigStorage, MemoryQueryCache, TokioScheduler, TracingNotifier,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::utils::StdinConfirmer;

pub struct App {
    pub config: ShopdeskConfig,
    pub api: ApiServices,
    pub context: EditorContext,
}

impl App {
    /// Loads the configuration and builds every service. Must run inside
    /// the tokio runtime.
    pub fn load(config_path: Option<PathBuf>, assume_yes: bool) -> Result<Self> {
        let storage = open_storage(config_path)?;
        let config = storage
            .load()
            .with_context(|| format!("Failed to load {}", storage.path().display()))?;
        let api = ApiServices::from_config(&config).context("Failed to create the API client")?;

        let context = EditorContext {
            scheduler: Arc::new(TokioScheduler::current()?),
            notifier: Arc::new(TracingNotifier),
            confirmer: Arc::new(StdinConfirmer::new(assume_yes)),
            cache: Arc::new(MemoryQueryCache::new(config.cache.ttl())),
            settings: config.autosave,
        };

        Ok(Self {
            config,
            api,
            context,
        })
    }

    pub fn products(&self) -> ProductFormService {
        ProductFormService::new(
            Arc::clone(&self.api.products),
            Arc::clone(&self.context.cache),
            Arc::clone(&self.context.notifier),
        )
    }

    pub fn languages(&self) -> LanguageService {
        LanguageService::new(
            Arc::clone(&self.api.languages),
            Arc::clone(&self.context.cache),
            Arc::clone(&self.context.notifier),
            Arc::clone(&self.context.confirmer),
        )
    }

    pub fn ai(&self) -> AiContentService {
        AiContentService::new(Arc::clone(&self.api.ai), Arc::clone(&self.context.notifier))
    }
}

pub fn open_storage(config_path: Option<PathBuf>) -> Result<ConfigStorage> {
    match config_path {
        Some(path) => Ok(ConfigStorage::new(path)),
        None => ConfigStorage::default_location().context("No config location available"),
    }
}
