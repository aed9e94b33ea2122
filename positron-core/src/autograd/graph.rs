use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node: the address of its shared allocation.
///
/// The visited set must be keyed by identity, never by value equality, because
/// two structurally-equal but distinct nodes are different graph entries. The
/// pointer is only used as a key; it is never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Post-order of every node reachable from `root` through the operand
/// relation. Each node appears exactly once, after all of its operands.
///
/// `Value::backward` iterates the result *reversed*: root first, leaves last,
/// which is exactly "every consumer runs before any of its operands", the
/// order that makes gradient accumulation correct for diamond-shaped fan-in.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<Value> = Vec::new();
    build_topo(root, &mut visited, &mut order);
    order
}

/// Recursively builds the post-order. A node records itself only after fully
/// visiting each operand subtree.
fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, order: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        return;
    }

    let grad_fn = node.read_data().grad_fn.clone();
    if let Some(grad_fn) = grad_fn {
        for input in grad_fn.inputs() {
            build_topo(&input, visited, order);
        }
    }

    log::trace!("build_topo: recorded node {:?} ({:?})", node.node_id(), node.op());
    order.push(node.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Position of each node in the *reversed* order, keyed by identity.
    fn reversed_positions(order: &[Value]) -> HashMap<NodeId, usize> {
        order
            .iter()
            .rev()
            .enumerate()
            .map(|(i, node)| (node.node_id(), i))
            .collect()
    }

    /// Every consumer must precede all of its operands in the reversed order.
    fn assert_consumers_first(order: &[Value]) {
        let pos = reversed_positions(order);
        for node in order {
            for operand in node.operands() {
                assert!(
                    pos[&node.node_id()] < pos[&operand.node_id()],
                    "operand ran before one of its consumers"
                );
            }
        }
    }

    #[test]
    fn test_chain_order() {
        let a = Value::new(2.0);
        let b = &a + 1.0;
        let c = &b * 3.0;

        let order = topological_sort(&c);
        // a, the two coerced constants, b and c
        assert_eq!(order.len(), 5);
        assert_eq!(order.last().unwrap().node_id(), c.node_id());
        assert_consumers_first(&order);
    }

    #[test]
    fn test_diamond_appears_exactly_once() {
        let a = Value::new(2.0);
        let b = &a + 1.0;
        let c = &a * 2.0;
        let d = &b * &c;

        let order = topological_sort(&d);
        let a_occurrences = order
            .iter()
            .filter(|n| n.node_id() == a.node_id())
            .count();
        assert_eq!(a_occurrences, 1);
        assert_consumers_first(&order);
    }

    #[test]
    fn test_same_node_used_twice_as_operand() {
        let a = Value::new(3.0);
        let b = &a * &a;

        let order = topological_sort(&b);
        assert_eq!(order.len(), 2);
        assert_consumers_first(&order);
    }

    #[test]
    fn test_repeated_sorts_are_consistent() {
        let a = Value::new(1.0);
        let b = &a + &a;
        let c = &b * &b;

        for _ in 0..3 {
            let order = topological_sort(&c);
            assert_eq!(order.len(), 3);
            assert_consumers_first(&order);
        }
    }

    #[test]
    fn test_leaf_root() {
        let a = Value::new(1.0);
        let order = topological_sort(&a);
        assert_eq!(order.len(), 1);
        assert_eq!(order[0].node_id(), a.node_id());
    }
}
