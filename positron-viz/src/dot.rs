use positron_core::autograd::NodeId;
use positron_core::Value;
use std::collections::HashSet;

/// Drawing direction of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    /// Top to bottom.
    TopBottom,
    /// Left to right.
    LeftRight,
}

impl RankDir {
    fn as_str(self) -> &'static str {
        match self {
            RankDir::TopBottom => "TB",
            RankDir::LeftRight => "LR",
        }
    }
}

/// Collects the nodes and operand→result edges reachable from `root`.
///
/// Deduplication is keyed by node identity, so a node consumed by several
/// operations appears once in `nodes` while contributing one edge per
/// consumer.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut nodes: Vec<Value> = Vec::new();
    let mut edges: Vec<(Value, Value)> = Vec::new();
    build(root, &mut seen, &mut nodes, &mut edges);
    (nodes, edges)
}

fn build(
    value: &Value,
    seen: &mut HashSet<NodeId>,
    nodes: &mut Vec<Value>,
    edges: &mut Vec<(Value, Value)>,
) {
    if !seen.insert(value.node_id()) {
        return;
    }
    nodes.push(value.clone());
    for operand in value.operands() {
        edges.push((operand.clone(), value.clone()));
        build(&operand, seen, nodes, edges);
    }
}

/// Renders the graph rooted at `root` as Graphviz DOT text.
///
/// Every value becomes a record node showing `label | d: data | g: grad`;
/// every non-leaf additionally gets a small satellite node carrying its
/// operator symbol, with edges operand → operator → result. Node names are
/// derived from node identity, so rendering the same graph twice yields the
/// same topology (addresses differ between runs, structure does not).
pub fn to_dot(root: &Value, rankdir: RankDir) -> String {
    let (nodes, edges) = trace(root);
    log::debug!(
        "to_dot: rendering {} nodes, {} edges",
        nodes.len(),
        edges.len()
    );

    let mut out = String::new();
    out.push_str("digraph {\n");
    out.push_str(&format!("  rankdir={};\n", rankdir.as_str()));

    for node in &nodes {
        let uid = node.node_id() as usize;
        out.push_str(&format!(
            "  \"{}\" [shape=record, label=\"{{ {} | d: {:.4} | g: {:.4} }}\"];\n",
            uid,
            node.label().unwrap_or_default(),
            node.data(),
            node.grad()
        ));

        let op = node.op();
        if !op.is_leaf() {
            // Satellite operator node feeding the result.
            out.push_str(&format!("  \"{}{}\" [label=\"{}\"];\n", uid, op, op));
            out.push_str(&format!("  \"{}{}\" -> \"{}\";\n", uid, op, uid));
        }
    }

    for (operand, result) in &edges {
        // Operands point at the operator node of their consumer.
        out.push_str(&format!(
            "  \"{}\" -> \"{}{}\";\n",
            operand.node_id() as usize,
            result.node_id() as usize,
            result.op()
        ));
    }

    out.push_str("}\n");
    out
}
