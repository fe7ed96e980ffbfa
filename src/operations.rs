//! Operation Registry
//!
//! Fixed mapping from operation name to a pure binary function over `f64`.
//!
//! Functions are total: division by zero, logarithms of non-positive numbers
//! and similar domain problems yield IEEE-754 values (`inf`, `NaN`) rather
//! than errors.

use std::collections::HashMap;

/// A pure binary arithmetic function.
pub type BinaryOp = fn(f64, f64) -> f64;

fn add(x: f64, y: f64) -> f64 {
    x + y
}

fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

fn divide(x: f64, y: f64) -> f64 {
    x / y
}

// Truncated remainder, sign follows x (C fmod).
fn modulo(x: f64, y: f64) -> f64 {
    x % y
}

fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

fn root(x: f64, y: f64) -> f64 {
    x.powf(1.0 / y)
}

// Logarithm of x in base y.
fn logarithm(x: f64, y: f64) -> f64 {
    x.ln() / y.ln()
}

const STANDARD_OPERATIONS: [(&str, BinaryOp); 8] = [
    ("add", add),
    ("subtract", subtract),
    ("multiply", multiply),
    ("divide", divide),
    ("mod", modulo),
    ("pow", power),
    ("root", root),
    ("log", logarithm),
];

// == Operation Registry ==
/// Immutable name-to-function table, built once at startup.
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    operations: HashMap<&'static str, BinaryOp>,
}

impl OperationRegistry {
    /// Registry holding the standard operation set.
    pub fn standard() -> Self {
        Self {
            operations: STANDARD_OPERATIONS.into_iter().collect(),
        }
    }

    /// Returns the function registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<BinaryOp> {
        self.operations.get(name).copied()
    }

    /// Applies the named operation, or `None` when it is unsupported.
    pub fn evaluate(&self, name: &str, x: f64, y: f64) -> Option<f64> {
        self.lookup(name).map(|op| op(x, y))
    }

    /// True if `name` is a supported operation.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Supported operation names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.operations.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
