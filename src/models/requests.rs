//! Request DTOs for the computation API
//!
//! Defines the structure of incoming operand payloads.

use serde::Deserialize;

/// Structured (JSON) request body carrying the two operands.
///
/// # Fields
/// - `x`: The left operand
/// - `y`: The right operand
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MathRequest {
    /// The left operand
    pub x: f64,
    /// The right operand
    pub y: f64,
}

/// The two numeric inputs to an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandPair {
    pub x: f64,
    pub y: f64,
}

impl OperandPair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<MathRequest> for OperandPair {
    fn from(req: MathRequest) -> Self {
        Self::new(req.x, req.y)
    }
}
