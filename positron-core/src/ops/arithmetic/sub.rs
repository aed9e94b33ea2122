// positron-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtraction, defined as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward() {
        let a = Value::new(5.0);
        let b = Value::new(3.0);
        assert_eq!(sub_op(&a, &b).data(), 2.0);
    }

    #[test]
    fn test_sub_backward() {
        let a = Value::new(5.0);
        let b = Value::new(3.0);
        let c = sub_op(&a, &b);
        c.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_sub_self_is_zero_but_graph_is_live() {
        let a = Value::new(4.0);
        let c = sub_op(&a, &a);
        assert_eq!(c.data(), 0.0);
        c.backward();
        // +1 from the left use, -1 from the negated right use.
        assert_eq!(a.grad(), 0.0);
    }
}
