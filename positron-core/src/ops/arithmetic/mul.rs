// positron-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two scalars and wires the result into the computation graph.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(data, Op::Mul, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward operation for multiplication.
///
/// Operand data is read at backward time; node data is immutable after
/// construction, so this is the same number the forward pass saw.
#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, upstream_grad: f64) {
        // d(a*b)/da = b, d(a*b)/db = a
        let lhs_local = self.rhs.data();
        let rhs_local = self.lhs.data();
        self.lhs.accumulate_grad(lhs_local * upstream_grad);
        self.rhs.accumulate_grad(rhs_local * upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Tests ---
