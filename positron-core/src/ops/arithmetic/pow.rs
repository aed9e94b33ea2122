// positron-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Raises `base` to a constant exponent.
///
/// The exponent is a plain `f64`, never a `Value`: it does not participate in
/// differentiation and is excluded from the operand list. A graph-valued
/// exponent simply does not type-check, which is the fail-fast rejection this
/// operation requires.
///
/// Domain errors follow floating-point semantics: `0.0.powf(-1.0)` is
/// infinite, negative bases with fractional exponents are NaN, and both
/// propagate through `data` without clamping.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    let grad_fn = PowBackward {
        input: base.clone(),
        exponent,
    };
    Value::from_op(data, Op::Pow(exponent), Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward operation for exponentiation by a constant.
#[derive(Debug)]
struct PowBackward {
    input: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, upstream_grad: f64) {
        // d(x^k)/dx = k * x^(k-1)
        let x = self.input.data();
        let local = self.exponent * x.powf(self.exponent - 1.0);
        self.input.accumulate_grad(local * upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
