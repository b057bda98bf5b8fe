//! Shared test utilities for the climate-api workspace.
//!
//! This crate provides common testing infrastructure including:
//! - A miniature station/measurement dataset with precomputed answers
//! - In-memory and on-disk SQLite databases seeded with that dataset
//! - Approximate float assertions for averaged temperatures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{expected, seeded_pool};
//! ```

pub mod database;
pub mod fixtures;

// Re-export commonly used items at the crate root
pub use database::*;
pub use fixtures::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(71.4285_f64, 500.0 / 7.0, 0.001); // passes
/// assert_approx_eq!(71.0_f64, 72.0_f64, 0.001);       // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
