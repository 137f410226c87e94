//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (exact path lookup)
//!     → method check against the route's allowed set
//!     → Return: matched Route, NotFound or MethodNotAllowed
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Exact path match only; no prefixes, no patterns
//! - OPTIONS never reaches the method check (CORS middleware answers it)

pub mod router;

pub use router::{Handler, Route, RouteError, RouteTable};
