//! Field-level validation for form drafts.
//!
//! Validation runs entirely on the client: a draft that fails any rule is
//! never sent to the server. Rules are plain predicates collected through
//! [`Checks`]; entity types implement [`Validate`] next to their models.

mod rules;

pub use rules::{Checks, SLUG_PATTERN};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ShopdeskError};

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of field errors. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Messages recorded for `field`, in rule order.
    pub fn for_field<'a, 'b>(
        &'a self,
        field: &'b str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'b> {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Keeps only the errors for `field`.
    pub fn only(self, field: &str) -> Self {
        Self(self.0.into_iter().filter(|e| e.field == field).collect())
    }

    /// Drops all errors for `field`.
    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|e| e.field != field);
    }

    /// Keeps the errors whose field satisfies `keep`.
    pub fn retain_fields<F>(&mut self, keep: F)
    where
        F: Fn(&str) -> bool,
    {
        self.0.retain(|e| keep(&e.field));
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// `Ok(())` when empty, otherwise a [`ShopdeskError::Validation`].
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ShopdeskError::Validation(self))
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Implemented by every draft type that has client-side rules.
pub trait Validate {
    /// Runs every rule and returns all failures.
    fn validate(&self) -> ValidationErrors;

    /// Runs the rules relevant to one field (blur-time validation).
    fn validate_field(&self, field: &str) -> ValidationErrors {
        self.validate().only(field)
    }

    /// Convenience for call sites that want a `Result`.
    fn check(&self) -> Result<()> {
        self.validate().into_result()
    }
}
