//! API Module
//!
//! HTTP handlers and routing for the cache admin REST API. Operators use it
//! to inspect the cache and to invalidate entries after out-of-band writes.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
