//! httpbin: HTTP request introspection service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net (TCP / TLS)
//!                        │
//!                        ▼
//!                     http::server ── trace layer
//!                        │
//!                        ▼
//!                     middleware::cors ── OPTIONS preflight answered here
//!                        │
//!                        ▼
//!                     middleware::transport (peer address, TLS flag)
//!                        │
//!                        ▼
//!                     timeout layer
//!                        │
//!                        ▼
//!                     routing (exact path, method check → 404 / 405)
//!                        │
//!                        ▼
//!                     introspect (scheme, headers, payload builders)
//!                        │
//!     Client Response    ▼
//!     ◀────────────── http::response (JSON)
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use httpbin::config::{load_config, validate_config, ConfigError, ServiceConfig};
use httpbin::http::HttpServer;
use httpbin::lifecycle::Shutdown;
use httpbin::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "httpbin")]
#[command(about = "HTTP request introspection service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the log level.
    #[arg(long)]
    log_level: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init(&config.observability.log_level);
    tracing::info!("httpbin v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let shutdown = Shutdown::on_signal();

    let tls = config.listener.tls.clone();
    let server = HttpServer::new(config);
    match tls {
        Some(tls) => {
            let addr: SocketAddr = server.config().listener.bind_address.parse()?;
            server.run_tls(addr, &tls, shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
            server.run(listener, shutdown).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
