//! JSON envelopes wrapping every API response.
//!
//! Success: `{"success": true, "message": <payload>}`.
//! Failure: `{"success": false, "message": "..."}`, or for validation
//! failures `{"success": false, "errors": ["...", ...]}`.

use serde::Serialize;

use crate::domain::Error;

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    message: T,
}

impl<T> Success<T> {
    /// Wrap `message` as a successful payload.
    pub fn new(message: T) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// Failure response body.
#[derive(Debug, Serialize)]
pub struct Failure {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl From<&Error> for Failure {
    fn from(error: &Error) -> Self {
        if error.violations().is_empty() {
            Self {
                success: false,
                message: Some(error.message().to_owned()),
                errors: None,
            }
        } else {
            Self {
                success: false,
                message: None,
                errors: Some(error.violations().to_vec()),
            }
        }
    }
}
