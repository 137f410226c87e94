//! Response payloads and the builders that produce them.
//!
//! Builders are pure: a `RequestSnapshot` in, a payload out. They never
//! touch the response; serialization happens in `http::response`.

use serde::{Deserialize, Serialize};

use crate::http::snapshot::RequestSnapshot;
use crate::introspect::headers::ValueMap;
use crate::introspect::scheme::resolve_scheme;

/// Header consulted for the generic payload's `origin`.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Full echo of a request: arguments, headers, origin and URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericPayload {
    pub args: ValueMap,
    pub headers: ValueMap,
    pub origin: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpPayload {
    pub origin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAgentPayload {
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadersPayload {
    pub headers: ValueMap,
}

/// Build the generic payload.
///
/// `origin` only reflects explicit forwarding identification
/// (`X-Forwarded-For`); the transport address is not consulted here.
pub fn build_generic(req: &RequestSnapshot) -> GenericPayload {
    let origin = req
        .headers
        .get_all(X_FORWARDED_FOR)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ");

    GenericPayload {
        args: ValueMap::from_query(&req.query),
        headers: ValueMap::from_headers(&req.headers),
        origin,
        url: request_url(req),
    }
}

/// Build the IP payload from the raw transport address, unmodified.
pub fn build_ip(req: &RequestSnapshot) -> IpPayload {
    IpPayload {
        origin: req.remote_addr.clone(),
    }
}

pub fn build_user_agent(req: &RequestSnapshot) -> UserAgentPayload {
    UserAgentPayload {
        user_agent: req.header("user-agent").unwrap_or_default(),
    }
}

pub fn build_headers(req: &RequestSnapshot) -> HeadersPayload {
    HeadersPayload {
        headers: ValueMap::from_headers(&req.headers),
    }
}

/// `scheme://host/path[?query]`, with host and path exactly as received.
pub fn request_url(req: &RequestSnapshot) -> String {
    let scheme = resolve_scheme(&req.headers, req.tls);
    let mut url = format!("{}://{}{}", scheme, req.host, req.path);
    if !req.query.is_empty() {
        url.push('?');
        url.push_str(&req.query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::snapshot::Transport;
    use axum::http::Request;

    fn snapshot(builder: axum::http::request::Builder, transport: Option<Transport>) -> RequestSnapshot {
        let mut req = builder.body(()).unwrap();
        if let Some(t) = transport {
            req.extensions_mut().insert(t);
        }
        let (parts, _) = req.into_parts();
        RequestSnapshot::from_parts(&parts)
    }

    #[test]
    fn test_generic_basic() {
        let req = snapshot(
            Request::get("/get")
                .header("Host", "localhost")
                .header("User-Agent", "test"),
            None,
        );

        let payload = build_generic(&req);
        assert!(payload.args.is_empty());
        assert_eq!(payload.args.encode(), "");
        assert_eq!(payload.origin, "");
        assert_eq!(payload.url, "http://localhost/get");
        assert_eq!(payload.headers.get("User-Agent"), "test");
        assert_eq!(payload.headers.get("Content-Type"), "");
    }

    #[test]
    fn test_generic_with_query_and_forwarding() {
        let req = snapshot(
            Request::get("/get?foo=bar&foo=baz")
                .header("Host", "Example.COM")
                .header("X-Forwarded-For", "1.2.3.4")
                .header("X-Forwarded-Ssl", "on"),
            Some(Transport {
                remote_addr: "9.9.9.9:1".into(),
                tls: false,
            }),
        );

        let payload = build_generic(&req);
        assert_eq!(payload.args.get_all("foo").unwrap(), ["bar", "baz"]);
        assert_eq!(payload.origin, "1.2.3.4");
        assert_eq!(payload.url, "https://Example.COM/get?foo=bar&foo=baz");
    }

    #[test]
    fn test_generic_origin_ignores_transport() {
        let req = snapshot(
            Request::get("/get").header("Host", "h"),
            Some(Transport {
                remote_addr: "192.168.0.100".into(),
                tls: true,
            }),
        );

        let payload = build_generic(&req);
        assert_eq!(payload.origin, "");
        assert_eq!(payload.url, "https://h/get");
    }

    #[test]
    fn test_ip_is_verbatim() {
        let req = snapshot(
            Request::get("/ip").header("X-Forwarded-For", "1.2.3.4"),
            Some(Transport {
                remote_addr: "[::1]:40000".into(),
                tls: false,
            }),
        );
        assert_eq!(build_ip(&req).origin, "[::1]:40000");
    }

    #[test]
    fn test_user_agent() {
        let req = snapshot(Request::get("/user-agent").header("User-Agent", "curl/8.0"), None);
        assert_eq!(build_user_agent(&req).user_agent, "curl/8.0");

        let req = snapshot(Request::get("/user-agent"), None);
        assert_eq!(build_user_agent(&req).user_agent, "");
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(UserAgentPayload {
            user_agent: "x".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "user-agent": "x" }));

        let req = snapshot(Request::get("/get?a=1").header("Host", "h"), None);
        let json = serde_json::to_value(build_generic(&req)).unwrap();
        assert_eq!(json["args"], serde_json::json!({ "a": ["1"] }));
        assert_eq!(json["headers"]["Host"], serde_json::json!(["h"]));
        assert_eq!(json["url"], "http://h/get?a=1");
    }
}
