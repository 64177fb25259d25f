//! Storage layer for atomic config file operations.

mod atomic_toml;
mod config_storage;

pub use atomic_toml::AtomicTomlFile;
pub use config_storage::{ConfigStorage, apply_env_overrides};
