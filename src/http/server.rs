//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a catch-all dispatcher
//! - Wire up middleware (tracing, timeout, transport, CORS)
//! - Bind to a plain listener or terminate TLS
//! - Dispatch requests through the immutable route table

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ServiceConfig, TlsConfig};
use crate::http::middleware::{cors_middleware, transport::TlsTermination, transport_middleware};
use crate::http::snapshot::RequestSnapshot;
use crate::lifecycle::Shutdown;
use crate::net::tls::load_tls_config;
use crate::observability::metrics;
use crate::routing::RouteTable;

/// Grace period for in-flight TLS connections on shutdown.
const TLS_DRAIN_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TLS setup failed: {0}")]
    Tls(std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the introspection service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            routes: Arc::new(RouteTable::standard()),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let tls = TlsTermination(config.listener.tls.is_some());
        let routes = state.routes.clone();

        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn_with_state(routes, cors_middleware))
                    .layer(middleware::from_fn_with_state(tls, transport_middleware))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serve plain HTTP on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: Shutdown,
    ) -> Result<(), ServeError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on `addr` until `shutdown` fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: &TlsConfig,
        shutdown: Shutdown,
    ) -> Result<(), ServeError> {
        let rustls = load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path))
            .await
            .map_err(ServeError::Tls)?;

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        let stopping = shutdown.wait();
        tokio::spawn(async move {
            stopping.await;
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        tracing::info!(address = %addr, "HTTPS server starting");
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(app)
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Catch-all handler: snapshot the request, resolve the route, run it.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let (parts, _body) = request.into_parts();
    let snapshot = RequestSnapshot::from_parts(&parts);

    match state.routes.resolve(&snapshot.method, &snapshot.path) {
        Ok(route) => {
            let response = (route.handler)(&snapshot);
            tracing::debug!(
                method = %snapshot.method,
                path = %snapshot.path,
                route = route.name,
                status = response.status().as_u16(),
                "Request handled"
            );
            metrics::record_request(&snapshot.method, response.status().as_u16(), route.name, start_time);
            response
        }
        Err(e) => {
            tracing::debug!(
                method = %snapshot.method,
                path = %snapshot.path,
                error = %e,
                "Request rejected"
            );
            metrics::record_request(&snapshot.method, e.status().as_u16(), "none", start_time);
            e.into_response()
        }
    }
}
