//! Request and Response models for the computation API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{MathRequest, OperandPair};
pub use responses::{ComputationResult, ErrorResponse, HealthResponse, StatsResponse};
