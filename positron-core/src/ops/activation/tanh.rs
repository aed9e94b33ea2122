// positron-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Hyperbolic tangent: (e^{2x} - 1) / (e^{2x} + 1).
///
/// Recorded as a single node with its own gradient rule rather than composed
/// from exp/div, so the activation of every neuron costs one node.
pub fn tanh_op(input: &Value) -> Value {
    let e2x = (2.0 * input.data()).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    let grad_fn = TanhBackward {
        input: input.clone(),
        output: t,
    };
    Value::from_op(t, Op::Tanh, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward operation for tanh: d(tanh x)/dx = 1 - tanh(x)^2, with the tanh
/// result captured at construction.
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, upstream_grad: f64) {
        let local = 1.0 - self.output * self.output;
        self.input.accumulate_grad(local * upstream_grad);
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
    fn test_tanh_forward() {
        assert_eq!(tanh_op(&Value::new(0.0)).data(), 0.0);
        assert_relative_eq!(
            tanh_op(&Value::new(1.0)).data(),
            1.0_f64.tanh(),
            epsilon = 1e-12
        );
        // Saturation at both ends.
        assert_relative_eq!(tanh_op(&Value::new(20.0)).data(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(tanh_op(&Value::new(-20.0)).data(), -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tanh_gradient_matches_closed_form() {
        // 1 - tanh(x)^2 across zero, moderate and saturated inputs.
        for x in [0.0, 0.5, -0.5, 2.0, -2.0, 20.0, -20.0] {
            let input = Value::new(x);
            let out = tanh_op(&input);
            out.backward();
            let t = out.data();
            assert_relative_eq!(input.grad(), 1.0 - t * t, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tanh_matches_finite_differences() {
        let inputs = vec![Value::new(0.3)];
        check_grad(|xs| xs[0].tanh(), &inputs, 1e-6, 1e-4).unwrap();
    }

    #[test]
    fn test_tanh_composed_from_exp_agrees() {
        // The textbook decomposition (e^{2x} - 1)/(e^{2x} + 1) built out of
        // exp/div nodes must agree with the fused op, gradients included.
        let x1 = Value::new(0.8813735870195432);
        let fused = tanh_op(&x1);
        fused.backward();

        let x2 = Value::new(0.8813735870195432);
        let e = (2.0 * &x2).exp();
        let composed = (&e - 1.0) / (&e + 1.0);
        composed.backward();

        assert_relative_eq!(fused.data(), composed.data(), epsilon = 1e-12);
        assert_relative_eq!(x1.grad(), x2.grad(), epsilon = 1e-9);
    }
}
