//! Trains the classic [3, 4, 4, 1] network on a four-sample batch with a
//! sum-of-squared-errors loss and prints predictions before and after.
//!
//! Run with `RUST_LOG=info cargo run --example train_mlp` to watch the loss.

use positron_core::nn::Mlp;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng).expect("valid layer sizes");

    let inputs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = vec![1.0, -1.0, -1.0, 1.0];

    print_predictions("before", &mlp, &inputs);

    let history = mlp
        .train(&inputs, &targets, 200, 0.01)
        .expect("training batch is well-formed");

    println!(
        "loss: {:.6} -> {:.6} over {} iterations",
        history[0],
        history.last().unwrap(),
        history.len()
    );

    print_predictions("after", &mlp, &inputs);
}

fn print_predictions(tag: &str, mlp: &Mlp, inputs: &[Vec<f64>]) {
    let predictions: Vec<f64> = inputs
        .iter()
        .map(|sample| {
            mlp.forward_scalars(sample).expect("arity matches")[0].data()
        })
        .collect();
    println!("{tag}: {predictions:?}");
}
