//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, layers)
//!     → middleware/cors.rs (Allow-Origin, preflight short-circuit)
//!     → middleware/transport.rs (peer address, TLS flag)
//!     → server.rs dispatch (snapshot.rs, route table lookup)
//!     → handlers.rs (payload builder or static page)
//!     → response.rs (JSON)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod response;
pub mod server;
pub mod snapshot;

pub use server::{HttpServer, ServeError};
pub use snapshot::{RequestSnapshot, Transport};
