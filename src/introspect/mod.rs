//! Request introspection subsystem.
//!
//! # Data Flow
//! ```text
//! RequestSnapshot
//!     → scheme.rs (X-Forwarded-* / TLS → http|https)
//!     → headers.rs (canonical keys, ordered multi-values)
//!     → payload.rs (Generic | Ip | UserAgent | Headers)
//!     → http::response (JSON)
//! ```
//!
//! # Design Decisions
//! - Builders are pure functions; no shared state
//! - Generic `origin` and IP `origin` use different signals on purpose

pub mod headers;
pub mod payload;
pub mod scheme;

pub use headers::{canonical_header_key, ValueMap};
pub use payload::{GenericPayload, HeadersPayload, IpPayload, UserAgentPayload};
pub use scheme::resolve_scheme;
