//! CORS emulation middleware.
//!
//! # Behavior
//! - Every response gets `Access-Control-Allow-Origin`: the inbound `Origin`
//!   verbatim, else `*` (also on 404/405)
//! - `OPTIONS` on a known path is answered here as a preflight (200, empty
//!   body) and never reaches the method check
//!
//! # Design Decisions
//! - Hand-written rather than `tower_http::cors`: the reply must be `*` when
//!   no `Origin` was sent and the preflight echoes request headers verbatim

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::routing::RouteTable;

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, PATCH, OPTIONS";
pub const MAX_AGE_SECS: &str = "3600";

pub async fn cors_middleware(
    State(routes): State<Arc<RouteTable>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let allow_origin = request
        .headers()
        .get(header::ORIGIN)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    if request.method() == Method::OPTIONS && routes.contains(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "Answering preflight");
        let mut response = StatusCode::OK.into_response();
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        insert_preflight_headers(request.headers(), headers);
        return response;
    }

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    response
}

fn insert_preflight_headers(inbound: &HeaderMap, headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE_SECS),
    );
    // Omitted entirely when the client did not ask.
    if let Some(requested) = inbound.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
    }
}
