//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → plain: tokio TcpListener handed to axum::serve
//!     → TLS:   tls.rs (rustls config) handed to axum-server
//!     → peer address exposed to handlers as ConnectInfo<SocketAddr>
//! ```
//!
//! # Design Decisions
//! - TLS is optional and handled transparently
//! - Whether TLS is terminated here is known at router build time

pub mod tls;

pub use tls::load_tls_config;
