//! Uniform JSON response envelope.
//!
//! Every API response serializes as `{success, data, message, errors}`.
//! Success responses carry `data` and a human-readable `message`; failures
//! set `success: false` and populate `message`, `errors`, or both.

use serde::Serialize;

/// The wrapper around every JSON API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload on success, `null` otherwise.
    pub data: Option<T>,
    /// Human-readable outcome description.
    pub message: Option<String>,
    /// Validation error messages, in rule order.
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response with a payload.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Failure with a single message and no errors list.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Failure carrying accumulated validation messages.
    pub fn validation_error(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some("Validation failed".to_owned()),
            errors: Some(errors),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload (e.g. after a delete).
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }
}
