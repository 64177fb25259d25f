//! Platform paths for Shopdesk files.
//!
//! ```text
//! ~/.config/shopdesk/          # Config directory (platform equivalent elsewhere)
//! └── config.toml              # API, auto-save and cache settings
//! ```

use shopdesk_core::error::{Result, ShopdeskError};
use std::path::PathBuf;

const APP_DIR: &str = "shopdesk";
const CONFIG_FILE: &str = "config.toml";

/// Overrides the config directory (tests, portable installs).
pub const CONFIG_DIR_ENV: &str = "SHOPDESK_CONFIG_DIR";

pub struct ShopdeskPaths;

impl ShopdeskPaths {
    /// Returns the Shopdesk configuration directory.
    ///
    /// `SHOPDESK_CONFIG_DIR` wins over the platform default.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ShopdeskError::config("Cannot determine the configuration directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
