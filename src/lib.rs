//! Math Serv - A stateless arithmetic computation service
//!
//! Applies named binary operations to two operands and memoizes answers with
//! time-based expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod operations;
pub mod parser;
pub mod response;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use handler::{InboundRequest, RequestHandler};
pub use tasks::spawn_cleanup_task;
