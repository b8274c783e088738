//! Password policy for new passwords.

use daylog_core::config::AuthConfig;
use daylog_core::error::{AppError, FieldErrors};

/// Checks new passwords against the configured minimum length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Create a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Record any failure for `field` into `errors`.
    pub fn check(&self, field: &str, password: &str, errors: &mut FieldErrors) {
        if password.is_empty() {
            errors.add(field, "required", format!("The {field} field is required."));
        } else if password.chars().count() < self.min_length {
            errors.add(
                field,
                "min",
                format!(
                    "The {field} must be at least {} characters.",
                    self.min_length
                ),
            );
        }
    }

    /// Validate a password on its own.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        self.check("password", password, &mut errors);
        errors.into_result()
    }
}
