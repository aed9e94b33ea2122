//! Prints the DOT source of the textbook neuron's computation graph.
//!
//! Pipe into graphviz to render it:
//! `cargo run --example computation_graph | dot -Tsvg > graph.svg`

use positron_core::Value;
use positron_viz::{to_dot, RankDir};

fn main() {
    let x1 = Value::new(2.0).with_label("x1");
    let x2 = Value::new(0.0).with_label("x2");
    let w1 = Value::new(-3.0).with_label("w1");
    let w2 = Value::new(1.0).with_label("w2");
    let b = Value::new(6.8813735870195432).with_label("b");

    let z = (&x1 * &w1 + &x2 * &w2 + &b).with_label("z");
    let y = z.tanh().with_label("y");
    y.backward();

    print!("{}", to_dot(&y, RankDir::LeftRight));
}
