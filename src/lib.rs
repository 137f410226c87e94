//! HTTP request introspection service.
//!
//! Every endpoint echoes facts about the inbound request (query arguments,
//! headers, client address, user agent, resolved scheme) back as JSON, and
//! every response carries emulated CORS headers.

pub mod config;
pub mod http;
pub mod introspect;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
