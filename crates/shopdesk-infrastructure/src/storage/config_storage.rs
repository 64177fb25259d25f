//! Loading and saving `config.toml`.
//!
//! The file is optional: a missing file yields defaults. Environment
//! variables are applied on top of whatever the file says.

use shopdesk_core::config::ShopdeskConfig;
use shopdesk_core::error::{Result, ShopdeskError};
use std::path::{Path, PathBuf};

use super::atomic_toml::AtomicTomlFile;
use crate::paths::ShopdeskPaths;

pub const API_URL_ENV: &str = "SHOPDESK_API_URL";
pub const API_TOKEN_ENV: &str = "SHOPDESK_API_TOKEN";
pub const API_TIMEOUT_ENV: &str = "SHOPDESK_API_TIMEOUT_SECS";
pub const DEBOUNCE_ENV: &str = "SHOPDESK_AUTOSAVE_DEBOUNCE_MS";

pub struct ConfigStorage {
    file: AtomicTomlFile<ShopdeskConfig>,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Storage at the platform config location.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(ShopdeskPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// File contents only, without environment overrides.
    pub fn load_file(&self) -> Result<ShopdeskConfig> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    /// Effective configuration: file (or defaults) plus environment.
    pub fn load(&self) -> Result<ShopdeskConfig> {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        tracing::debug!(
            "[ConfigStorage] Loaded config from {} (api: {})",
            self.path().display(),
            config.api.base_url
        );
        Ok(config)
    }

    pub fn save(&self, config: &ShopdeskConfig) -> Result<()> {
        self.file.save(config)?;
        tracing::info!("[ConfigStorage] Saved config to {}", self.path().display());
        Ok(())
    }

    /// Writes a default config file unless one exists. Returns whether a
    /// file was created.
    pub fn init(&self) -> Result<bool> {
        if self.path().exists() {
            return Ok(false);
        }
        self.save(&ShopdeskConfig::default())?;
        Ok(true)
    }

    /// Locked read-modify-write of the file.
    pub fn update<F>(&self, f: F) -> Result<ShopdeskConfig>
    where
        F: FnOnce(&mut ShopdeskConfig) -> Result<()>,
    {
        self.file.update(ShopdeskConfig::default(), f)
    }
}

/// Applies `SHOPDESK_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut ShopdeskConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = var(API_URL_ENV) {
        config.api.base_url = url;
    }
    if let Some(token) = var(API_TOKEN_ENV) {
        config.api.token = Some(token);
    }
    if let Some(timeout) = var(API_TIMEOUT_ENV) {
        config.api.timeout_secs = parse_number(API_TIMEOUT_ENV, &timeout)?;
    }
    if let Some(debounce) = var(DEBOUNCE_ENV) {
        config.autosave.debounce_ms = parse_number(DEBOUNCE_ENV, &debounce)?;
    }
    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        ShopdeskError::config(format!("{} must be a non-negative integer, got '{}'", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("config.toml"));
        assert_eq!(storage.load_file().unwrap(), ShopdeskConfig::default());
    }

    #[test]
    fn test_init_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("shopdesk/config.toml"));

        assert!(storage.init().unwrap());
        assert!(!storage.init().unwrap());
        assert!(storage.path().exists());
    }

    #[test]
    fn test_update_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("config.toml"));

        storage
            .update(|config| {
                config.api.base_url = "https://shop.example.com/api".to_string();
                config.autosave.enabled = false;
                Ok(())
            })
            .unwrap();

        let loaded = storage.load_file().unwrap();
        assert_eq!(loaded.api.base_url, "https://shop.example.com/api");
        assert!(!loaded.autosave.enabled);
        assert_eq!(loaded.autosave.debounce_ms, 3000);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ShopdeskConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                (API_URL_ENV, "https://staging.example.com/api"),
                (API_TOKEN_ENV, "secret"),
                (DEBOUNCE_ENV, "500"),
                (API_TIMEOUT_ENV, " "),
            ]),
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://staging.example.com/api");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        assert_eq!(config.autosave.debounce_ms, 500);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_env_number_is_config_error() {
        let mut config = ShopdeskConfig::default();
        let err = apply_env_overrides(&mut config, env(&[(API_TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ShopdeskError::Config(_)));
    }
}
