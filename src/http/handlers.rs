//! Route handlers: snapshot in, response out.

use axum::response::Response;

use crate::http::pages;
use crate::http::response::json_response;
use crate::http::snapshot::RequestSnapshot;
use crate::introspect::payload;

pub fn index(_: &RequestSnapshot) -> Response {
    pages::index()
}

pub fn forms_post(_: &RequestSnapshot) -> Response {
    pages::forms_post()
}

pub fn get(req: &RequestSnapshot) -> Response {
    json_response(&payload::build_generic(req))
}

pub fn ip(req: &RequestSnapshot) -> Response {
    json_response(&payload::build_ip(req))
}

pub fn user_agent(req: &RequestSnapshot) -> Response {
    json_response(&payload::build_user_agent(req))
}

pub fn headers(req: &RequestSnapshot) -> Response {
    json_response(&payload::build_headers(req))
}
