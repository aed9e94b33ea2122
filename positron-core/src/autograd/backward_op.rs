use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf `Value` has an associated
/// `BackwardOp` implementation. It is built at construction time, stored in
/// the output node's `grad_fn` field, and captures exactly what the chain rule
/// needs later: strong handles to the operand nodes plus any constant
/// parameters of the operation (e.g. the exponent of `pow`).
pub trait BackwardOp: Debug {
    /// Pushes this node's fully-accumulated gradient onto its operands.
    ///
    /// `upstream_grad` is d(root)/d(output) for the node this op produced. For
    /// each operand the implementation computes the *local* partial derivative
    /// d(output)/d(operand), multiplies it by `upstream_grad` and **adds** the
    /// product into the operand's gradient accumulator
    /// (`Value::accumulate_grad`). Assignment instead of accumulation would
    /// silently corrupt gradients whenever a node has more than one consumer.
    ///
    /// The backward pass guarantees this is only invoked once all consumers of
    /// the output have already contributed, so `upstream_grad` is final.
    fn backward(&self, upstream_grad: f64);

    /// The operand nodes that participated in the forward operation, in the
    /// order they were passed. This is the edge set of the computation graph:
    /// the topological sort walks it, and `Value::operands` exposes it to
    /// consumers such as graph rendering.
    fn inputs(&self) -> Vec<Value>;
}
