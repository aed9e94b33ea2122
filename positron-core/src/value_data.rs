use crate::autograd::BackwardOp;
use crate::ops::Op;
use std::rc::Rc;

/// The record behind a `Value` handle: one scalar node of the computation graph.
///
/// `ValueData` is always wrapped in `Rc<RefCell<...>>` by `Value`, which is what
/// allows a single node to be an operand of arbitrarily many downstream nodes
/// (fan-in) while its `grad` field stays writable during the backward pass.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar produced by this node. Computed once, at construction, from
    /// its operands. Only leaf parameters are ever rewritten afterwards
    /// (optimizer updates between training iterations); a new forward pass must
    /// be run to reflect updated parameters in downstream nodes.
    pub data: f64,

    /// Accumulator for d(root)/d(self). Starts at 0.0 and is only mutated by
    /// backward passes and explicit resets (`zero_grad`).
    pub grad: f64,

    /// Tag of the operation that produced this node (`Op::Leaf` for inputs and
    /// parameters). Used for diagnostics and graph rendering, not for dispatch.
    pub op: Op,

    /// The chain-rule step installed by the operation that produced this node.
    /// Holds strong handles to the operand `Value`s; `None` for leaves.
    pub grad_fn: Option<Rc<dyn BackwardOp>>,

    /// Cosmetic display name. No effect on computation.
    pub label: Option<String>,
}

impl ValueData {
    /// A leaf node: an input or a trainable parameter.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            grad_fn: None,
            label: None,
        }
    }

    /// A node produced by an operation, wired to its operands through `grad_fn`.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }
}
