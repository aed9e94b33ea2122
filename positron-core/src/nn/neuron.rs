use crate::error::PositronError;
use crate::nn::module::Module;
use crate::nn::{init, Parameter};
use crate::value::Value;
use rand::Rng;

/// A single tanh neuron: `tanh(Σ w_i · x_i + b)`.
///
/// Weights and bias are initialized from U(-1, 1).
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `input_size` connections.
    pub fn new<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Self {
        let weights = (0..input_size)
            .map(|_| Parameter::new(init::uniform(rng, -1.0, 1.0)))
            .collect();
        let bias = Parameter::new(init::uniform(rng, -1.0, 1.0));
        Neuron { weights, bias }
    }

    /// Number of inputs this neuron accepts.
    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Weighted sum of the inputs plus bias, pushed through tanh. The whole
    /// expression becomes part of the caller's computation graph.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, PositronError> {
        if inputs.len() != self.weights.len() {
            return Err(PositronError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let activation = inputs
            .iter()
            .zip(self.weights.iter())
            .fold((*self.bias).clone(), |acc, (x, w)| acc + x * &**w);

        Ok(activation.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, PositronError> {
        Neuron::forward(self, inputs).map(|out| vec![out])
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
