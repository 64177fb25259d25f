//! Controlled form state with blur- and submit-time validation.

use std::collections::BTreeSet;

use crate::error::ShopdeskError;
use crate::validation::{Validate, ValidationErrors};

/// Values, visible field errors, touched fields and the submitting flag of
/// one form.
///
/// Errors are only shown for touched fields until the first submit attempt,
/// after which every field counts as touched.
#[derive(Debug, Clone)]
pub struct FormState<T> {
    values: T,
    errors: ValidationErrors,
    touched: BTreeSet<String>,
    submit_attempted: bool,
    submitting: bool,
    server_error: Option<String>,
}

impl<T: Validate + Clone> FormState<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: ValidationErrors::new(),
            touched: BTreeSet::new(),
            submit_attempted: false,
            submitting: false,
            server_error: None,
        }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// First visible message for `field`, for inline display.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.for_field(field).next()
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.submit_attempted || self.touched.contains(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Mutates the values and refreshes errors of touched fields.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.values);
        self.refresh_errors();
    }

    /// Marks `field` touched and validates it.
    pub fn blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.refresh_errors();
    }

    fn refresh_errors(&mut self) {
        let mut errors = self.values.validate();
        if !self.submit_attempted {
            let touched = &self.touched;
            errors.retain_fields(|field| touched.contains(field));
        }
        self.errors = errors;
    }

    /// Validates everything and, when valid, enters the submitting state and
    /// returns the values to send.
    ///
    /// Returns `None` (and sends nothing) when any rule fails or a submission
    /// is already running.
    pub fn begin_submit(&mut self) -> Option<T> {
        if self.submitting {
            return None;
        }
        self.submit_attempted = true;
        self.server_error = None;
        self.errors = self.values.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(self.values.clone())
    }

    /// Records the outcome of a submission started by `begin_submit`.
    ///
    /// Server-side validation errors are shown inline; any other error is
    /// kept as a form-level message.
    pub fn finish_submit<R>(&mut self, result: &Result<R, ShopdeskError>) {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.server_error = None;
            }
            Err(ShopdeskError::Validation(errors)) => {
                self.errors = errors.clone();
            }
            Err(err) => {
                self.server_error = Some(err.user_message());
            }
        }
    }

    /// Replaces the values and forgets all interaction state.
    pub fn reset(&mut self, values: T) {
        *self = Self::new(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductInput;

    fn valid_input() -> ProductInput {
        ProductInput {
            name: "Linen Shirt".to_string(),
            sku: "LS-001".to_string(),
            slug: "linen-shirt".to_string(),
            price: 49.0,
            stock_quantity: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_errors_hidden_until_blur() {
        let mut form = FormState::new(ProductInput::default());
        assert!(form.errors().is_empty());

        form.blur("name");
        assert!(form.error_for("name").is_some());
        assert!(form.error_for("sku").is_none());
    }

    #[test]
    fn test_error_message_outlives_field_name() {
        let mut form = FormState::new(ProductInput::default());
        form.blur("name");

        let message = {
            let field = String::from("name");
            form.error_for(&field)
        };
        assert_eq!(message, Some("Name is required"));
    }

    #[test]
    fn test_update_clears_fixed_error() {
        let mut form = FormState::new(ProductInput::default());
        form.blur("name");
        form.update(|v| v.name = "Mug".to_string());
        assert!(form.error_for("name").is_none());
    }

    #[test]
    fn test_submit_blocked_when_invalid() {
        let mut input = valid_input();
        input.sale_price = Some(60.0);
        let mut form = FormState::new(input);

        assert!(form.begin_submit().is_none());
        assert!(!form.is_submitting());
        assert!(form.error_for("sale_price").is_some());
        assert!(form.is_touched("name"));
    }

    #[test]
    fn test_submit_cycle() {
        let mut form = FormState::new(valid_input());
        let values = form.begin_submit().unwrap();
        assert_eq!(values.name, "Linen Shirt");
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());

        let result: Result<(), ShopdeskError> =
            Err(ShopdeskError::http(409, "SKU already exists"));
        form.finish_submit(&result);
        assert!(!form.is_submitting());
        assert_eq!(form.server_error(), Some("SKU already exists"));
    }
}
