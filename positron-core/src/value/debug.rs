// src/value/debug.rs
use crate::value::Value;
use std::fmt;

// Manual implementation: a derived Debug would recurse through grad_fn into
// the whole ancestor graph. Only the operands' labels are shown, matching what
// is useful when inspecting a single node.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        let parent_labels: Vec<String> = self
            .operands()
            .iter()
            .map(|p| p.label().unwrap_or_default())
            .collect();

        write!(
            f,
            "Value(data={}, grad={}, op={:?}, label={:?}, parents={:?})",
            guard.data, guard.grad, guard.op, guard.label, parent_labels
        )
    }
}
