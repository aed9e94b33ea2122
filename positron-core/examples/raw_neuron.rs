//! Builds the textbook two-input neuron by hand, runs the backward pass and
//! prints every node's data and gradient.
//!
//! Run with `RUST_LOG=debug cargo run --example raw_neuron` to see the
//! engine's traversal logging.

use positron_core::Value;

fn main() {
    env_logger::init();

    let x1 = Value::new(2.0).with_label("x1");
    let x2 = Value::new(0.0).with_label("x2");
    let w1 = Value::new(-3.0).with_label("w1");
    let w2 = Value::new(1.0).with_label("w2");
    let b = Value::new(6.8813735870195432).with_label("b");

    let z = (&x1 * &w1 + &x2 * &w2 + &b).with_label("z");
    let y = z.tanh().with_label("y");

    println!("forward: y = {:.10}", y.data());

    y.backward();

    for node in [&x1, &x2, &w1, &w2, &b, &z, &y] {
        println!(
            "{:>2}: data = {:>10.4}, grad = {:>10.4}",
            node.label().unwrap_or_default(),
            node.data(),
            node.grad()
        );
    }
}
