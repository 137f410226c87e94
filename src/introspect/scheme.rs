//! Logical request scheme resolution.
//!
//! # Priority (first match wins)
//! 1. `X-Forwarded-Proto` present → its literal value
//! 2. `X-Forwarded-Protocol` present → its literal value
//! 3. `X-Forwarded-Ssl: on` → `https`
//! 4. TLS terminated by this server → `https`
//! 5. otherwise → `http`
//!
//! Signals are not required to agree; only the priority order applies.

use axum::http::HeaderMap;

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const X_FORWARDED_PROTOCOL: &str = "x-forwarded-protocol";
pub const X_FORWARDED_SSL: &str = "x-forwarded-ssl";

/// Resolve the scheme the client used, as seen through any proxies.
pub fn resolve_scheme(headers: &HeaderMap, tls: bool) -> String {
    if let Some(proto) = header_str(headers, X_FORWARDED_PROTO) {
        return proto;
    }
    if let Some(proto) = header_str(headers, X_FORWARDED_PROTOCOL) {
        return proto;
    }
    if header_str(headers, X_FORWARDED_SSL).as_deref() == Some("on") {
        return "https".to_string();
    }
    if tls {
        return "https".to_string();
    }
    "http".to_string()
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}
