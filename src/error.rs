//! Application error kinds shared by repositories, services and handlers.
//!
//! Errors carry a human-readable message plus structured `details` that are
//! logged but never sent to clients. The HTTP status is chosen by the
//! handler's verb (see [`crate::api::response`]), not by the error itself.

use serde_json::{Value, json};

/// Message reported for failures that carry no usable text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-caused: missing field, malformed input, violated constraint.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Database or driver failure.
    #[error("{message}")]
    Backend { message: String, details: Value },

    /// Failure without any textual message.
    #[error("{}", UNKNOWN_ERROR_MESSAGE)]
    Unknown { details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn backend(message: impl Into<String>, details: Value) -> Self {
        Self::Backend {
            message: message.into(),
            details,
        }
    }

    pub fn unknown(details: Value) -> Self {
        Self::Unknown { details }
    }

    /// Stable identifier of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Backend { .. } => "backend_error",
            AppError::Unknown { .. } => "unknown_error",
        }
    }

    /// Text safe to show to API clients.
    ///
    /// Falls back to [`UNKNOWN_ERROR_MESSAGE`] when the error has no message.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Backend { message, .. }
                if !message.trim().is_empty() =>
            {
                message.as_str()
            }
            _ => UNKNOWN_ERROR_MESSAGE,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Backend { details, .. }
            | AppError::Unknown { details } => details,
        }
    }

    /// Returns true for errors the caller is responsible for.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation { .. } | AppError::NotFound { .. })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::bad_request(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() {
                return AppError::bad_request(
                    "Referenced record does not exist",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::not_found("Record not found", json!({}));
        }

        AppError::backend(e.to_string(), json!({ "source": "database" }))
    }
}
