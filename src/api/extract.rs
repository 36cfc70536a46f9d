//! Custom Axum extractors that reject with envelope failures.
//!
//! Axum's stock `Query` and `Json` extractors answer with plain-text bodies
//! and their own status codes. These wrappers convert the rejection into an
//! [`AppError`] so malformed input follows the same status mapping as every
//! other failure of the handler.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::api::response::{ReadFailure, WriteFailure};
use crate::error::AppError;

/// Query string extractor for read handlers.
///
/// A key given more than once resolves to its first value.
pub struct ListQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ListQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ReadFailure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(
                    rejection.body_text(),
                    json!({ "query": parts.uri.query() }),
                )
            })?;

        let value = serde_json::from_value(first_values(pairs)).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "query": parts.uri.query() }))
        })?;

        Ok(Self(value))
    }
}

fn first_values(pairs: Vec<(String, String)>) -> Value {
    let mut params = Map::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(Value::String(value));
    }
    Value::Object(params)
}

/// JSON body extractor for create handlers.
///
/// The body is parsed as JSON whatever its `Content-Type` says.
pub struct CreateBody<T>(pub T);

impl<T, S> FromRequest<S> for CreateBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WriteFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(
                rejection.body_text(),
                json!({ "status": rejection.status().as_u16() }),
            )
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::bad_request(
                format!("Invalid JSON body: {}", e),
                json!({ "line": e.line(), "column": e.column() }),
            )
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins_for_repeated_keys() {
        let pairs = vec![
            ("status".to_string(), "pending".to_string()),
            ("customerId".to_string(), "3".to_string()),
            ("status".to_string(), "served".to_string()),
        ];

        assert_eq!(
            first_values(pairs),
            json!({ "status": "pending", "customerId": "3" })
        );
    }
}
