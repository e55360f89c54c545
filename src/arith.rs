//! Integer arithmetic helpers.
//!
//! All helpers take `i64` by value and use Rust's native overflow behaviour:
//! debug builds panic on overflow, release builds wrap.

/// Returns `a + b`.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Returns `a * b`.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}
