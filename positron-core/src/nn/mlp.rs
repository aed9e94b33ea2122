use crate::error::PositronError;
use crate::nn::module::Module;
use crate::nn::{sse_loss, Layer, Parameter};
use crate::optim::{Optimizer, Sgd};
use crate::value::Value;
use rand::Rng;

/// A multilayer perceptron: a stack of fully-connected tanh layers.
///
/// `Mlp::new(3, &[4, 4, 1], rng)` builds the classic 3-input network with two
/// hidden layers of four neurons and a single output.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, PositronError> {
        if layer_sizes.is_empty() {
            return Err(PositronError::EmptyNetwork);
        }
        for (index, &size) in layer_sizes.iter().enumerate() {
            if size == 0 {
                return Err(PositronError::EmptyLayer { index });
            }
        }

        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(input_size);
        sizes.extend_from_slice(layer_sizes);

        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], rng))
            .collect();

        Ok(Mlp { layers })
    }

    /// Forward pass over raw scalars: wraps each into a leaf first.
    pub fn forward_scalars(&self, inputs: &[f64]) -> Result<Vec<Value>, PositronError> {
        let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward(&leaves)
    }

    /// Plain gradient-descent training on a batch, using a sum-of-squared-errors
    /// loss. One iteration is: forward every sample, reduce to a single loss
    /// node, reset parameter gradients, backward, take an SGD step of
    /// `step_size`. Returns the loss recorded at each iteration.
    ///
    /// Requires a single-output network, since each target is one scalar.
    pub fn train(
        &self,
        inputs: &[Vec<f64>],
        targets: &[f64],
        iterations: usize,
        step_size: f64,
    ) -> Result<Vec<f64>, PositronError> {
        if inputs.len() != targets.len() {
            return Err(PositronError::BatchSizeMismatch {
                predictions: inputs.len(),
                targets: targets.len(),
            });
        }

        let mut optimizer = Sgd::new(self.parameters(), step_size);
        let mut history = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            // The graph is rebuilt from scratch every iteration so the forward
            // pass sees the updated parameter data.
            let mut predictions = Vec::with_capacity(inputs.len());
            for sample in inputs {
                let outputs = self.forward_scalars(sample)?;
                if outputs.len() != 1 {
                    return Err(PositronError::NonScalarOutput {
                        outputs: outputs.len(),
                    });
                }
                predictions.extend(outputs);
            }

            let loss = sse_loss(&predictions, targets)?;
            optimizer.zero_grad();
            loss.backward();
            optimizer.step()?;

            log::info!("iteration {}: loss = {}", iteration, loss.data());
            history.push(loss.data());
        }

        Ok(history)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, PositronError> {
        let mut current: Vec<Value> = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}
