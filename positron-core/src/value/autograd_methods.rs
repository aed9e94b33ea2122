use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds `self.grad = 1.0` (d(self)/d(self)), orders every reachable node
    /// so that each node runs only after all of its consumers have contributed
    /// their partial gradients, then invokes each node's chain-rule step with
    /// its fully-accumulated gradient.
    ///
    /// Gradients are *accumulated*: calling `backward` twice without resetting
    /// sums the two passes. Callers who want a fresh per-iteration gradient
    /// must call `zero_grad` on the participating leaves first (optimizers do
    /// this via `Optimizer::zero_grad`).
    pub fn backward(&self) {
        self.write_data().grad = 1.0;

        let order = topological_sort(self);
        log::debug!("backward: {} nodes reachable from root", order.len());

        // Reversed post-order: root first, leaves last. Leaves carry no
        // grad_fn, so reaching them is a no-op.
        for node in order.iter().rev() {
            let (upstream_grad, grad_fn) = {
                let guard = node.read_data();
                (guard.grad, guard.grad_fn.clone())
            };
            if let Some(op) = grad_fn {
                op.backward(upstream_grad);
            }
        }
    }

    /// Resets this node's gradient accumulator to 0.0.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds `contribution` into this node's gradient accumulator.
    ///
    /// Always `+=`, never `=`: a node consumed by several downstream
    /// operations receives one contribution per consumer during a single
    /// backward pass, and overwriting would silently corrupt every fan-in
    /// gradient.
    pub fn accumulate_grad(&self, contribution: f64) {
        self.write_data().grad += contribution;
    }
}
