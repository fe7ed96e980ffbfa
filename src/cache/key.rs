//! Cache Key Module
//!
//! Canonical key for a computation: `x`, the operation name and `y`
//! concatenated, with both operands written in Rust's shortest round-trip
//! float format. Distinct `f64` values never share a key (`-0.0` and `0.0`
//! included); textual variants like `"1.0"` and `"1.00"` collide because they
//! are parsed to the same float first.

use std::fmt;

/// Hashable identity of an `(operation, x, y)` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds the key for `operation` applied to `x` and `y`.
    pub fn new(operation: &str, x: f64, y: f64) -> Self {
        Self(format!("{x:?}{operation}{y:?}"))
    }

    /// The encoded key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
