//! HTTP API layer: router, handlers, envelope, and validation.
//!
//! Per-endpoint pipeline: body deserialization, then domain validation, then
//! the id sanity check, and only then the service call. Failures short of
//! the service call never touch the store. Every JSON response is wrapped in
//! [`envelope::ApiResponse`].

pub mod contact_routes;
pub mod envelope;
pub mod requests;
pub mod server;
pub mod validation;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::contacts::service::ContactService;

use self::envelope::ApiResponse;

/// Shared state for API handlers.
///
/// The service is held as a trait object so tests can substitute an
/// in-memory fake for the SQL-backed implementation.
pub struct ApiState {
    /// Contact operations.
    pub contacts: Arc<dyn ContactService>,
}

/// Failure outcomes of a handler, each mapped to an envelope response.
///
/// Store faults arrive here already reduced to a generic message; the
/// internal detail is logged at the call site and never serialized.
#[derive(Debug)]
pub enum ApiError {
    /// Input violated declared constraints: 400 with an errors list.
    Validation(Vec<String>),
    /// Non-positive or non-numeric id: 400 with a fixed message.
    BadId,
    /// The requested contact does not exist: 404.
    NotFound(i64),
    /// Unexpected fault: 500 with a generic, endpoint-specific message.
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse<()>) = match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::validation_error(errors),
            ),
            Self::BadId => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error("Contact ID must be a positive integer"),
            ),
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ApiResponse::error(format!("Contact with ID {id} was not found")),
            ),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::error(message)),
        };
        (status, Json(body)).into_response()
    }
}
