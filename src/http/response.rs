//! Response serialization.
//!
//! # Responsibilities
//! - Encode payloads as pretty-printed JSON
//! - Set `Content-Type: application/json`
//!
//! # Design Decisions
//! - Serialization failure is an internal fault: logged, answered with 500
//! - No retry; the transform is synchronous and has no external calls

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const APPLICATION_JSON: &str = "application/json";

/// Serialize `payload` into a 200 JSON response.
pub fn json_response<T: Serialize>(payload: &T) -> Response {
    match serde_json::to_vec_pretty(payload) {
        Ok(mut body) => {
            body.push(b'\n');
            (
                [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response payload");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
