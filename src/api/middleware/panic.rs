//! Converts handler panics into failure envelopes.
//!
//! A panic carries no usable error message, so the client always receives
//! `"Unknown error occurred"`. The payload is logged when it is a string.
//! The status follows the verb mapping of [`crate::api::response`], so read
//! and create routes get separate layers.

use std::any::Any;

use axum::{body::Body, http::Response, http::StatusCode};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::api::response::failure_response;
use crate::error::UNKNOWN_ERROR_MESSAGE;

/// Panic responder answering with a fixed status.
#[derive(Debug, Clone, Copy)]
pub struct PanicEnvelope {
    status: StatusCode,
}

impl ResponseForPanic for PanicEnvelope {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let payload = err
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| err.downcast_ref::<&str>().copied())
            .unwrap_or("<non-string panic payload>");

        tracing::error!(panic = payload, status = %self.status, "Handler panicked");

        failure_response(self.status, UNKNOWN_ERROR_MESSAGE)
    }
}

/// Panic guard for read (GET) routes: `500`.
pub fn read_layer() -> CatchPanicLayer<PanicEnvelope> {
    CatchPanicLayer::custom(PanicEnvelope {
        status: StatusCode::INTERNAL_SERVER_ERROR,
    })
}

/// Panic guard for create (POST) routes: `400`.
pub fn write_layer() -> CatchPanicLayer<PanicEnvelope> {
    CatchPanicLayer::custom(PanicEnvelope {
        status: StatusCode::BAD_REQUEST,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        routing::{get, post},
    };
    use axum_test::TestServer;
    use serde_json::json;

    async fn boom() -> &'static str {
        panic!("something exploded")
    }

    fn make_server() -> TestServer {
        let app = Router::new()
            .route("/things", get(boom).layer(read_layer()))
            .route("/things", post(boom).layer(write_layer()));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_panic_on_read_is_500_unknown() {
        let server = make_server();

        let response = server.get("/things").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "success": false,
            "message": "Unknown error occurred"
        }));
    }

    #[tokio::test]
    async fn test_panic_on_create_is_400_unknown() {
        let server = make_server();

        let response = server.post("/things").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "success": false,
            "message": "Unknown error occurred"
        }));
    }
}
