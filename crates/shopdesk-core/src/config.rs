use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DEBOUNCE_MS: u64 = 3000;
pub const DEFAULT_SAVED_DISPLAY_MS: u64 = 2000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShopdeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub autosave: AutoSaveSettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Bearer token sent on every request when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSaveSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Quiet period after the last edit before a save is issued.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How long the "saved" indicator stays before reverting to idle.
    #[serde(default = "default_saved_display_ms")]
    pub saved_display_ms: u64,
}

impl AutoSaveSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn saved_display(&self) -> Duration {
        Duration::from_millis(self.saved_display_ms)
    }
}

impl Default for AutoSaveSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            saved_display_ms: DEFAULT_SAVED_DISPLAY_MS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_saved_display_ms() -> u64 {
    DEFAULT_SAVED_DISPLAY_MS
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: ShopdeskConfig = toml::from_str("").unwrap();
        assert_eq!(config, ShopdeskConfig::default());
        assert_eq!(config.autosave.debounce(), Duration::from_millis(3000));
        assert_eq!(config.autosave.saved_display(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_sections() {
        let config: ShopdeskConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://shop.example.com/api"
            token = "secret"

            [autosave]
            debounce_ms = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://shop.example.com/api");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.autosave.debounce_ms, 1500);
        assert!(config.autosave.enabled);
        assert_eq!(config.cache.ttl_secs, DEFAULT_CACHE_TTL_SECS);
    }
}
