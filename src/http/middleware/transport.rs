//! Attaches transport facts (peer address, TLS) to each request.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

use crate::http::snapshot::Transport;

/// Whether the listener in front of this router terminates TLS.
#[derive(Debug, Clone, Copy, Default)]
pub struct TlsTermination(pub bool);

pub async fn transport_middleware(
    State(TlsTermination(tls)): State<TlsTermination>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    // An extension already present (set by an outer layer or a test) wins.
    if request.extensions().get::<Transport>().is_none() {
        let remote_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_default();
        request
            .extensions_mut()
            .insert(Transport { remote_addr, tls });
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    async fn echo(Extension(t): Extension<Transport>) -> String {
        format!("{}|{}", t.remote_addr, t.tls)
    }

    fn app(tls: bool) -> Router {
        Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn_with_state(TlsTermination(tls), transport_middleware))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_connect_info_becomes_transport() {
        let mut request = Request::get("/").body(Body::empty()).unwrap();
        let addr: SocketAddr = "192.168.0.100:51234".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "192.168.0.100:51234|true");
    }

    #[tokio::test]
    async fn test_missing_connect_info() {
        let request = Request::get("/").body(Body::empty()).unwrap();
        let response = app(false).oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "|false");
    }

    #[tokio::test]
    async fn test_existing_transport_kept() {
        let mut request = Request::get("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(Transport {
            remote_addr: "192.168.0.100".into(),
            tls: false,
        });
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(body_string(response).await, "192.168.0.100|false");
    }
}
