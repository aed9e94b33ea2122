// positron-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Division, defined as `a * b^-1`.
///
/// Division by zero is not pre-validated: `b = 0` makes `b^-1` infinite and
/// the product follows IEEE-754 from there.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}
