use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldError, ValidationErrors};

/// Lowercase words separated by single hyphens, e.g. `summer-sale-2024`.
pub static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Accumulates rule failures for one draft.
///
/// Each rule takes the wire field name (used to attach the error to an input)
/// and a human label (used in the message).
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &str, message: String) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn required(&mut self, field: &str, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, format!("{} is required", label));
        }
        self
    }

    pub fn max_len(&mut self, field: &str, label: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.fail(
                field,
                format!("{} must be at most {} characters", label, max),
            );
        }
        self
    }

    pub fn min_len(&mut self, field: &str, label: &str, value: &str, min: usize) -> &mut Self {
        // Blank values are the `required` rule's concern.
        if !value.is_empty() && value.chars().count() < min {
            self.fail(
                field,
                format!("{} must be at least {} characters", label, min),
            );
        }
        self
    }

    pub fn optional_max_len(
        &mut self,
        field: &str,
        label: &str,
        value: Option<&str>,
        max: usize,
    ) -> &mut Self {
        if let Some(value) = value {
            self.max_len(field, label, value, max);
        }
        self
    }

    pub fn at_least(&mut self, field: &str, label: &str, value: f64, min: f64) -> &mut Self {
        if !value.is_finite() || value < min {
            self.fail(field, format!("{} must be at least {}", label, min));
        }
        self
    }

    pub fn in_range(
        &mut self,
        field: &str,
        label: &str,
        value: i64,
        min: i64,
        max: i64,
    ) -> &mut Self {
        if value < min || value > max {
            self.fail(
                field,
                format!("{} must be between {} and {}", label, min, max),
            );
        }
        self
    }

    /// Cross-field rule: `value` must be strictly below `bound`.
    pub fn less_than(
        &mut self,
        field: &str,
        label: &str,
        value: f64,
        bound_label: &str,
        bound: f64,
    ) -> &mut Self {
        if value >= bound {
            self.fail(
                field,
                format!("{} must be less than {}", label, bound_label),
            );
        }
        self
    }

    /// Skips empty values so optional fields can share the rule.
    pub fn pattern(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        pattern: &Regex,
        hint: &str,
    ) -> &mut Self {
        if !value.is_empty() && !pattern.is_match(value) {
            self.fail(field, format!("{} {}", label, hint));
        }
        self
    }

    pub fn custom(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.fail(field, message.into());
        self
    }

    pub fn finish(&mut self) -> ValidationErrors {
        ValidationErrors::from(std::mem::take(&mut self.errors))
    }
}
