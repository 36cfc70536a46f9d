//! Uniform JSON envelope for resource endpoints.
//!
//! Every resource response has the shape
//!
//! ```json
//! { "success": true,  "data": ... }
//! { "success": false, "message": "..." }
//! ```
//!
//! Exactly one of `data` / `message` is present and `success` is true iff the
//! status code is 2xx.
//!
//! # Status mapping
//!
//! | Verb | Outcome            | Status |
//! |------|--------------------|--------|
//! | GET  | success            | 200    |
//! | GET  | any failure        | 500    |
//! | POST | success            | 201    |
//! | POST | any failure        | 400    |
//!
//! The status depends on the verb only. Error kinds are kept for logging.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Serialized response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Successful envelope response with its status code.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// `200 OK`, used by read handlers.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    /// `201 Created`, used by create handlers.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::success(self.data))).into_response()
    }
}

/// Builds a failure envelope response.
pub fn failure_response(status: StatusCode, message: &str) -> Response {
    (status, Json(Envelope::failure(message))).into_response()
}

fn log_failure(operation: &'static str, error: &AppError) {
    if error.is_client_error() {
        tracing::warn!(
            operation,
            kind = error.kind(),
            details = %error.details(),
            "{}",
            error.public_message()
        );
    } else {
        tracing::error!(
            operation,
            kind = error.kind(),
            details = %error.details(),
            "{}",
            error.public_message()
        );
    }
}

/// Failure of a read (GET) handler. Always `500 Internal Server Error`.
#[derive(Debug)]
pub struct ReadFailure(pub AppError);

impl From<AppError> for ReadFailure {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ReadFailure {
    fn into_response(self) -> Response {
        log_failure("read", &self.0);
        failure_response(StatusCode::INTERNAL_SERVER_ERROR, self.0.public_message())
    }
}

/// Failure of a create (POST) handler. Always `400 Bad Request`, for
/// validation and execution failures alike.
#[derive(Debug)]
pub struct WriteFailure(pub AppError);

impl From<AppError> for WriteFailure {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for WriteFailure {
    fn into_response(self) -> Response {
        log_failure("create", &self.0);
        failure_response(StatusCode::BAD_REQUEST, self.0.public_message())
    }
}
