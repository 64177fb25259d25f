pub mod ai;
pub mod cms;
pub mod config;
pub mod envelope;
pub mod error;
pub mod footer;
pub mod form;
pub mod language;
pub mod ports;
pub mod product;
pub mod serde_ext;
pub mod session;
pub mod translation;
pub mod validation;

// Re-export common error type
pub use error::{Result, ShopdeskError};
