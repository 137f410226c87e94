//! Immutable per-request view used by the response builders.
//!
//! # Responsibilities
//! - Capture method, path, raw query and headers once at dispatch
//! - Resolve the Host value (header, then URI authority)
//! - Carry transport facts (peer address, TLS) from the `Transport` extension
//!
//! # Design Decisions
//! - Owned data only: nothing borrows from the request after extraction
//! - Missing transport info is not an error; it reads as `""` / `false`

use axum::http::{header, request::Parts, HeaderMap};

/// Transport facts attached to each request by the listener side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transport {
    /// Peer address exactly as the socket reported it.
    pub remote_addr: String,
    /// Whether this server terminated TLS for the connection.
    pub tls: bool,
}

#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub method: String,
    pub path: String,
    /// Query string without the leading `?`; empty when absent.
    pub query: String,
    pub headers: HeaderMap,
    pub host: String,
    pub remote_addr: String,
    pub tls: bool,
}

impl RequestSnapshot {
    pub fn from_parts(parts: &Parts) -> Self {
        let transport = parts
            .extensions
            .get::<Transport>()
            .cloned()
            .unwrap_or_default();

        let host = parts
            .headers
            .get(header::HOST)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .or_else(|| parts.uri.authority().map(|a| a.as_str().to_string()))
            .unwrap_or_default();

        Self {
            method: parts.method.as_str().to_string(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().unwrap_or_default().to_string(),
            headers: parts.headers.clone(),
            host,
            remote_addr: transport.remote_addr,
            tls: transport.tls,
        }
    }

    /// Literal value of a header, if it was sent.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }
}
