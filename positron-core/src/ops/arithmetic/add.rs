// positron-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two scalars and wires the result into the computation graph.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(data, Op::Add, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward operation for addition.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, upstream_grad: f64) {
        // d(a+b)/da = 1, d(a+b)/db = 1
        self.lhs.accumulate_grad(upstream_grad);
        self.rhs.accumulate_grad(upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Op;

    #[test]
    fn test_add_forward() {
        let a = Value::new(2.0);
        let b = Value::new(3.5);
        let c = add_op(&a, &b);
        assert_eq!(c.data(), 5.5);
        assert_eq!(c.op(), Op::Add);
        assert_eq!(c.operands().len(), 2);
    }

    #[test]
    fn test_add_backward() {
        let a = Value::new(2.0);
        let b = Value::new(3.5);
        let c = add_op(&a, &b);
        c.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
        assert_eq!(c.grad(), 1.0);
    }

    #[test]
    fn test_add_same_operand_twice() {
        // a + a: both contributions must land on the single shared node.
        let a = Value::new(4.0);
        let c = add_op(&a, &a);
        assert_eq!(c.data(), 8.0);
        c.backward();
        assert_eq!(a.grad(), 2.0);
    }

    #[test]
    fn test_add_fan_in_from_two_consumers() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let lhs = add_op(&a, &b);
        let rhs = add_op(&a, &b);
        let root = add_op(&lhs, &rhs);
        root.backward();
        assert_eq!(a.grad(), 2.0);
        assert_eq!(b.grad(), 2.0);
    }
}
