//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use Serde for deserialization and validator for the
//! required-field checks. Responses serialize with camelCase field names.

pub mod customer;
pub mod health;
pub mod menu_item;
pub mod order;

use serde_json::json;
use validator::{ValidationError, ValidationErrors};

use crate::error::AppError;

/// Maps failed required-field validation to a resource-specific message.
///
/// The offending field names are kept in the error details, sorted.
pub(crate) fn required_fields_error(message: &'static str, errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort_unstable();
    AppError::bad_request(message, json!({ "fields": fields }))
}

/// Treats empty query/body strings as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Rejects a zero amount. Any other value, negative included, is accepted.
pub(crate) fn non_zero_amount(value: f64) -> Result<(), ValidationError> {
    if value == 0.0 {
        return Err(ValidationError::new("non_zero"));
    }
    Ok(())
}

/// Rejects a zero id.
pub(crate) fn non_zero_id(value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new("non_zero"));
    }
    Ok(())
}
