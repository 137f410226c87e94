//! Request middleware applied around the dispatcher.
//!
//! Order (outermost first): cors → transport → timeout → dispatch.

pub mod cors;
pub mod transport;

pub use cors::cors_middleware;
pub use transport::transport_middleware;
