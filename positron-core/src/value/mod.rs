// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod debug;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can be an operand of many downstream
///     operations without copying (cheap clones). The operand relation is
///     acyclic by construction, so shared strong handles cannot leak.
/// 2.  **Interior Mutability:** the `grad` accumulator (and, for leaf
///     parameters, `data`) can be updated through an immutable handle during
///     backward passes and optimizer steps.
///
/// The engine is single-threaded and synchronous; `Rc`/`RefCell` is the whole
/// concurrency story.
pub struct Value {
    /// Rc for shared ownership, RefCell for interior mutability of ValueData.
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data` (an input or a trainable parameter).
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a node produced by an operation. Only the op constructors in
    /// `crate::ops` go through here.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, op, grad_fn))),
        }
    }

    /// Attaches a display label and returns the handle, so graph construction
    /// can stay a single expression.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.write_data().label = Some(label.into());
        self
    }

    /// The scalar carried by this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the scalar of a leaf between training iterations.
    ///
    /// Downstream nodes computed from the old value are not recomputed; run a
    /// new forward pass to see the update.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// The accumulated gradient d(root)/d(self) from the last backward pass,
    /// or 0.0 if none ran.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// The operator tag of the operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Whether this node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns a clone of the display label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Direct operands of this node (empty for leaves). The handles are clones
    /// of the ones recorded at construction time, so identity is preserved.
    pub fn operands(&self) -> Vec<Value> {
        let grad_fn = self.read_data().grad_fn.clone();
        grad_fn.map(|op| op.inputs()).unwrap_or_default()
    }

    /// Stable identity of this node, keyed on the shared allocation rather than
    /// the scalar it carries. Two structurally-equal but distinct nodes have
    /// different ids.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Acquires a shared borrow of the node's data.
    /// Panics if the node is currently mutably borrowed.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Acquires an exclusive borrow of the node's data.
    pub fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Raises this value to a constant exponent, see [`crate::ops::arithmetic::pow_op`].
    pub fn powf(&self, exponent: f64) -> Value {
        crate::ops::arithmetic::pow_op(self, exponent)
    }

    /// e^self, see [`crate::ops::math_elem::exp_op`].
    pub fn exp(&self) -> Value {
        crate::ops::math_elem::exp_op(self)
    }

    /// Hyperbolic tangent, see [`crate::ops::activation::tanh_op`].
    pub fn tanh(&self) -> Value {
        crate::ops::activation::tanh_op(self)
    }
}
