// src/value/traits.rs
//
// Operator overloading is how callers build the graph: every std::ops impl
// below wires a new node to its operands and installs the operation's local
// gradient rule. Bare f64 operands are coerced into fresh leaf nodes so that
// every arithmetic participant is a Value.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Clones the handle, not the node. This is a shallow clone that bumps the
    /// reference count of the shared data; gradients accumulated through one
    /// clone are visible through all others.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        // Scalar coercion: the f64 becomes a fresh leaf node.
        impl std::ops::$trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl std::ops::Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// `iterator.sum()` mirrors the reduction used when folding per-sample losses
// into a single scalar. The identity element is a fresh 0.0 leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_owned_and_borrowed_operand_mixes() {
        let a = Value::new(2.0);
        let b = Value::new(5.0);

        assert_eq!((&a + &b).data(), 7.0);
        assert_eq!((a.clone() + &b).data(), 7.0);
        assert_eq!((&a + b.clone()).data(), 7.0);
        assert_eq!((a.clone() + b.clone()).data(), 7.0);
    }

    #[test]
    fn test_scalar_coercion_both_sides() {
        let z = Value::new(3.0);
        assert_eq!((&z + 1.0).data(), 4.0);
        assert_eq!((1.0 + &z).data(), 4.0);
        assert_eq!((2.0 * &z).data(), 6.0);
        assert_eq!((&z - 0.5).data(), 2.5);
        assert_eq!((6.0 / &z).data(), 2.0);
    }

    #[test]
    fn test_coerced_scalar_becomes_an_operand_node() {
        let z = Value::new(3.0);
        let r = &z + 1.0;
        let operands = r.operands();
        assert_eq!(operands.len(), 2);
        assert!(operands[1].is_leaf());
        assert_eq!(operands[1].data(), 1.0);
    }

    #[test]
    fn test_neg() {
        let a = Value::new(4.0);
        assert_eq!((-&a).data(), -4.0);
        assert_eq!((-a).data(), -4.0);
    }

    #[test]
    fn test_sum_reduction() {
        let values = vec![Value::new(1.0), Value::new(2.0), Value::new(3.0)];
        let total: Value = values.iter().sum();
        assert_eq!(total.data(), 6.0);

        total.backward();
        for v in &values {
            assert_eq!(v.grad(), 1.0);
        }
    }
}
