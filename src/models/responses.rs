//! Response DTOs for the computation API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Serialize, Serializer};

use crate::cache::CacheStats;

/// Writes finite floats as JSON numbers and non-finite ones as the strings
/// `"Infinity"`, `"-Infinity"` and `"NaN"`, which plain JSON cannot carry.
pub fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

/// Outcome of a successfully handled request.
///
/// Serializes as `{"action", "x", "y", "answer", "cached"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    /// The operation name
    #[serde(rename = "action")]
    pub operation: String,
    /// The left operand
    #[serde(serialize_with = "serialize_float")]
    pub x: f64,
    /// The right operand
    #[serde(serialize_with = "serialize_float")]
    pub y: f64,
    /// The computed or memoized answer
    #[serde(serialize_with = "serialize_float")]
    pub answer: f64,
    /// Whether the answer came from the cache
    #[serde(rename = "cached")]
    pub was_cached: bool,
}

impl ComputationResult {
    /// Creates a new ComputationResult
    pub fn new(operation: impl Into<String>, x: f64, y: f64, answer: f64, was_cached: bool) -> Self {
        Self {
            operation: operation.into(),
            x,
            y,
            answer,
            was_cached,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of expired entries reclaimed
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Supported operation names
    pub operations: Vec<&'static str>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, operations: Vec<&'static str>) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            operations,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
