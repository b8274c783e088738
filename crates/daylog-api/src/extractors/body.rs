//! `LogForm` extractor: a lenient JSON body reader for log submissions.
//!
//! An empty body, `null`, or `[]` is an empty submission so the field rules
//! report what is missing. Fields of the wrong JSON type are rejected per
//! field instead of failing the whole body.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use daylog_core::error::{AppError, FieldErrors};
use daylog_core::result::AppResult;
use daylog_service::LogSubmission;

use crate::error::ApiError;

/// A log submission read from the request body.
#[derive(Debug, Clone)]
pub struct LogForm(pub LogSubmission);

impl<S> FromRequest<S> for LogForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| body_error("body", format!("The request body could not be read: {e}")))?;
        Ok(LogForm(parse_log_body(&bytes)?))
    }
}

fn body_error(code: &str, message: String) -> AppError {
    let mut fields = FieldErrors::new();
    fields.add("body", code, message);
    AppError::invalid_fields(fields)
}

/// Read `text` and `date` out of a JSON body.
pub fn parse_log_body(bytes: &[u8]) -> AppResult<LogSubmission> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(LogSubmission::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| body_error("json", format!("The request body is not valid JSON: {e}")))?;

    let mut fields = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        Value::Array(items) if items.is_empty() => Map::new(),
        _ => {
            return Err(body_error(
                "object",
                "The request body must be a JSON object.".to_string(),
            ));
        }
    };

    let mut submission = LogSubmission::default();
    submission.text = text_field(&mut submission, "text", fields.remove("text"));
    submission.date = text_field(&mut submission, "date", fields.remove("date"));
    Ok(submission)
}

fn text_field(submission: &mut LogSubmission, field: &str, value: Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            submission.reject(field, "string", format!("The {field} must be a string."));
            None
        }
    }
}
