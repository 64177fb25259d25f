//! Error types for the Shopdesk client.

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// A shared error type for every Shopdesk crate.
///
/// Network, HTTP and client-side validation failures all end up here so the
/// UI layer can turn any of them into a notice without inspecting the source.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ShopdeskError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("Network error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status, or with a success
    /// status whose envelope reported `success: false`.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Client-side validation failed; no request was sent.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShopdeskError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Http error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Serialization error
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for HTTP 404 and for domain `NotFound` errors.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status == 404,
            Self::NotFound { .. } => true,
            _ => false,
        }
    }

    /// True for any HTTP 4xx response.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// True for any HTTP 5xx response.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Text suitable for a toast or inline error.
    ///
    /// Server messages are returned verbatim; validation failures list the
    /// offending fields.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Transport { message } => message.clone(),
            Self::Validation(errors) => errors.to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<ValidationErrors> for ShopdeskError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<std::io::Error> for ShopdeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("I/O error: {} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for ShopdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ShopdeskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ShopdeskError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ShopdeskError>`.
pub type Result<T> = std::result::Result<T, ShopdeskError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn test_status_classification() {
        assert!(ShopdeskError::http(404, "missing").is_not_found());
        assert!(ShopdeskError::http(422, "bad").is_client_error());
        assert!(!ShopdeskError::http(422, "bad").is_server_error());
        assert!(ShopdeskError::http(503, "down").is_server_error());
        assert!(ShopdeskError::not_found("Product", "7").is_not_found());
        assert!(!ShopdeskError::transport("refused").is_client_error());
    }

    #[test]
    fn test_user_message_passes_server_text_through() {
        let err = ShopdeskError::http(500, "Translation table locked");
        assert_eq!(err.user_message(), "Translation table locked");
    }

    #[test]
    fn test_user_message_for_validation_lists_fields() {
        let errors = ValidationErrors::from(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("price", "Price must be at least 0"),
        ]);
        let err = ShopdeskError::from(errors);
        assert!(err.is_validation());
        let message = err.user_message();
        assert!(message.contains("Name is required"));
        assert!(message.contains("Price must be at least 0"));
    }
}
