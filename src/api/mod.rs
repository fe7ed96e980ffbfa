//! API Module
//!
//! HTTP handlers and routing for the computation server.
//!
//! # Endpoints
//! - `ANY /:op` - Apply a binary operation to `x` and `y`
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, create_router_with_timeout};
