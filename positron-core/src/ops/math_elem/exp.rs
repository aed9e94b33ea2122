// positron-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// e^input.
///
/// Inputs large enough to overflow produce an infinite `data` and the
/// infinity propagates; no clamping is applied.
pub fn exp_op(input: &Value) -> Value {
    let data = input.data().exp();
    let grad_fn = ExpBackward {
        input: input.clone(),
        output: data,
    };
    Value::from_op(data, Op::Exp, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward operation for the exponential.
///
/// Captures the result's own data at construction: d(e^x)/dx = e^x is exactly
/// the output, so re-deriving it from the input would just repeat the forward
/// computation.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, upstream_grad: f64) {
        self.input.accumulate_grad(self.output * upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_grad;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward() {
        let x = Value::new(0.0);
        assert_eq!(exp_op(&x).data(), 1.0);

        let y = Value::new(1.0);
        assert_relative_eq!(exp_op(&y).data(), std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn test_exp_backward_equals_own_output() {
        let x = Value::new(2.0);
        let y = exp_op(&x);
        y.backward();
        assert_relative_eq!(x.grad(), y.data(), epsilon = 1e-12);
    }

    #[test]
    fn test_exp_overflow_propagates() {
        let x = Value::new(1e4);
        assert!(exp_op(&x).data().is_infinite());
    }

    #[test]
    fn test_exp_matches_finite_differences() {
        let inputs = vec![Value::new(-0.8)];
        check_grad(|xs| xs[0].exp(), &inputs, 1e-6, 1e-4).unwrap();
    }
}
