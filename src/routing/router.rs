//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the fixed set of routes
//! - Resolve (method, path) to a route or an explicit error
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc`, no locks)
//! - Method comparison is exact string match on the verb

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::handlers;
use crate::http::snapshot::RequestSnapshot;

/// Produces the response for a matched route.
pub type Handler = fn(&RequestSnapshot) -> Response;

/// A (path, allowed methods, handler) binding.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Route identifier for logging/metrics.
    pub name: &'static str,
    pub path: &'static str,
    pub methods: &'static [&'static str],
    pub handler: Handler,
}

/// Why a request could not be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route for path")]
    NotFound,
    #[error("method not allowed (allowed: {})", .allowed.join(", "))]
    MethodNotAllowed { allowed: &'static [&'static str] },
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::NotFound => StatusCode::NOT_FOUND,
            RouteError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        if let RouteError::MethodNotAllowed { allowed } = self {
            if let Ok(value) = HeaderValue::from_str(&allowed.join(", ")) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }
        response
    }
}

/// Immutable dispatch table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        tracing::debug!(count = routes.len(), "Route table built");
        Self { routes }
    }

    /// The service's endpoints.
    pub fn standard() -> Self {
        const GET: &[&str] = &["GET"];
        Self::new(vec![
            Route {
                name: "index",
                path: "/",
                methods: GET,
                handler: handlers::index,
            },
            Route {
                name: "forms_post",
                path: "/forms/post",
                methods: GET,
                handler: handlers::forms_post,
            },
            Route {
                name: "get",
                path: "/get",
                methods: GET,
                handler: handlers::get,
            },
            Route {
                name: "ip",
                path: "/ip",
                methods: GET,
                handler: handlers::ip,
            },
            Route {
                name: "user_agent",
                path: "/user-agent",
                methods: GET,
                handler: handlers::user_agent,
            },
            Route {
                name: "headers",
                path: "/headers",
                methods: GET,
                handler: handlers::headers,
            },
        ])
    }

    /// Look up the route for `path`.
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Resolve a request to a route, enforcing the allowed-method set.
    pub fn resolve(&self, method: &str, path: &str) -> Result<&Route, RouteError> {
        let route = self.find(path).ok_or(RouteError::NotFound)?;
        if route.methods.contains(&method) {
            Ok(route)
        } else {
            Err(RouteError::MethodNotAllowed {
                allowed: route.methods,
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_route() {
        let table = RouteTable::standard();
        let route = table.resolve("GET", "/headers").unwrap();
        assert_eq!(route.name, "headers");
    }

    #[test]
    fn test_unknown_path() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("GET", "/nope").unwrap_err(), RouteError::NotFound);
        // Exact match only
        assert_eq!(table.resolve("GET", "/get/").unwrap_err(), RouteError::NotFound);
        assert!(!table.contains("/GET"));
    }

    #[test]
    fn test_method_not_allowed() {
        let table = RouteTable::standard();
        for method in ["POST", "PUT", "DELETE", "PATCH", "get"] {
            let err = table.resolve(method, "/get").unwrap_err();
            assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        }
    }

    #[test]
    fn test_method_not_allowed_response_has_allow_header() {
        let err = RouteError::MethodNotAllowed { allowed: &["GET"] };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET");
    }

    #[test]
    fn test_standard_table_paths() {
        let table = RouteTable::standard();
        let paths: Vec<_> = table.routes().iter().map(|r| r.path).collect();
        assert_eq!(paths, ["/", "/forms/post", "/get", "/ip", "/user-agent", "/headers"]);
    }
}
