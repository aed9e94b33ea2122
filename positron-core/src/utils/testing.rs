//! Assertion helpers shared by unit and integration tests.

use crate::value::Value;

/// Asserts that a node's data is within `epsilon` of `expected`.
pub fn check_value_near(value: &Value, expected: f64, epsilon: f64) {
    let actual = value.data();
    assert!(
        (actual - expected).abs() <= epsilon,
        "data mismatch: expected {} +/- {}, got {}",
        expected,
        epsilon,
        actual
    );
}

/// Asserts that a node's accumulated gradient is within `epsilon` of `expected`.
pub fn check_grad_near(value: &Value, expected: f64, epsilon: f64) {
    let actual = value.grad();
    assert!(
        (actual - expected).abs() <= epsilon,
        "gradient mismatch: expected {} +/- {}, got {}",
        expected,
        epsilon,
        actual
    );
}
