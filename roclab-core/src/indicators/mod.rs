//! Concrete streaming indicator implementations.
//!
//! Every indicator implements `StreamingIndicator` from
//! `components::indicator` and owns its own history; independent streams
//! use independent instances.

pub mod roc;

pub use roc::{as_percent, RocCalculator, DEFAULT_PERIOD};

/// Feed `values` through `advance` in order and collect every reading.
#[cfg(test)]
pub fn feed(
    indicator: &mut impl crate::components::StreamingIndicator,
    values: &[f64],
) -> Vec<Option<f64>> {
    values.iter().map(|&v| indicator.advance(v)).collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
