//! Log submission validation.
//!
//! Every failing rule is reported, keyed by field, before anything else
//! looks at the submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use daylog_core::config::RulesConfig;
use daylog_core::error::{AppError, FieldErrors};
use daylog_core::result::AppResult;
use daylog_entity::log::{UpdateLog, parse_calendar_date};

/// Raw log fields as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSubmission {
    /// Entry body.
    pub text: Option<String>,
    /// Calendar date in any accepted format.
    pub date: Option<String>,
    /// Fields the transport could not read as text, already failed.
    #[serde(skip)]
    pub rejected: FieldErrors,
}

impl LogSubmission {
    /// Submission with both fields present.
    pub fn new(text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            date: Some(date.into()),
            rejected: FieldErrors::new(),
        }
    }

    /// Mark a field as unreadable. The validator reports it alongside
    /// every other failure and skips the field's own rules.
    pub fn reject(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.rejected.add(field, code, message);
    }

    fn is_rejected(&self, field: &str) -> bool {
        self.rejected.get(field).is_some()
    }
}

/// A submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLog {
    /// Entry body.
    pub text: String,
    /// Parsed date.
    pub date: NaiveDate,
}

/// Applies the required, date, and blocked-word rules.
#[derive(Debug, Clone)]
pub struct LogValidator {
    blocked_words: Vec<String>,
    blocked_word_message: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl LogValidator {
    /// Create a validator from the configured rules.
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            blocked_words: rules.blocked_words.clone(),
            blocked_word_message: rules.blocked_word_message.clone(),
        }
    }

    /// Validate a new log; both fields are required.
    pub fn validate_create(&self, submission: &LogSubmission) -> AppResult<ValidLog> {
        let mut errors = submission.rejected.clone();

        let text = match submission.text.as_deref() {
            _ if submission.is_rejected("text") => None,
            Some(text) if !is_blank(text) => {
                self.check_text(text, &mut errors);
                Some(text.to_string())
            }
            _ => {
                errors.add("text", "required", "The text field is required.");
                None
            }
        };

        let date = match submission.date.as_deref() {
            _ if submission.is_rejected("date") => None,
            Some(date) if !is_blank(date) => Self::check_date(date, &mut errors),
            _ => {
                errors.add("date", "required", "The date field is required.");
                None
            }
        };

        match (text, date) {
            (Some(text), Some(date)) if errors.is_empty() => Ok(ValidLog { text, date }),
            _ => Err(AppError::invalid_fields(errors)),
        }
    }

    /// Validate a partial update; absent fields stay unchanged but present
    /// ones obey the same rules as on create.
    pub fn validate_update(&self, submission: &LogSubmission) -> AppResult<UpdateLog> {
        let mut errors = submission.rejected.clone();
        let mut update = UpdateLog::default();

        if let Some(text) = submission.text.as_deref().filter(|_| !submission.is_rejected("text")) {
            if is_blank(text) {
                errors.add("text", "required", "The text field is required.");
            } else {
                self.check_text(text, &mut errors);
                update.text = Some(text.to_string());
            }
        }

        if let Some(date) = submission.date.as_deref().filter(|_| !submission.is_rejected("date")) {
            if is_blank(date) {
                errors.add("date", "required", "The date field is required.");
            } else {
                update.date = Self::check_date(date, &mut errors);
            }
        }

        errors.into_result()?;
        Ok(update)
    }

    fn check_text(&self, text: &str, errors: &mut FieldErrors) {
        for word in &self.blocked_words {
            if !word.is_empty() && text.contains(word.as_str()) {
                errors.add(
                    "text",
                    "blocked_word",
                    self.blocked_word_message.replace("{word}", word),
                );
            }
        }
    }

    fn check_date(date: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
        let parsed = parse_calendar_date(date);
        if parsed.is_none() {
            errors.add("date", "date", "The date is not a valid date.");
        }
        parsed
    }
}
