// positron-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negation, defined as multiplication by a constant -1 leaf.
///
/// Delegating keeps a single multiplication gradient rule in the engine
/// instead of a second copy that could drift; the graph of `-a` therefore
/// contains a `Mul` node and a `-1.0` leaf.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}
