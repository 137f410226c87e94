//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use httpbin::config::ServiceConfig;
use httpbin::http::{HttpServer, Transport};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// The fully layered router with default configuration.
pub fn app() -> Router {
    HttpServer::new(ServiceConfig::default()).router()
}

/// Send one request through a fresh router.
pub async fn send(request: Request<Body>) -> Response<Body> {
    app().oneshot(request).await.unwrap()
}

/// A request carrying an explicit transport peer address.
pub fn with_remote_addr(mut request: Request<Body>, remote_addr: &str) -> Request<Body> {
    request.extensions_mut().insert(Transport {
        remote_addr: remote_addr.to_string(),
        tls: false,
    });
    request
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("body {:?} is not JSON: {}", String::from_utf8_lossy(&bytes), e))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start a real server on an ephemeral port. Returns its address and a
/// shutdown handle.
pub async fn start_server() -> (SocketAddr, httpbin::Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = httpbin::Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default());
    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}
