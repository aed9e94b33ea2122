use crate::error::PositronError;
use crate::nn::module::Module;
use crate::nn::{Neuron, Parameter};
use crate::value::Value;
use rand::Rng;

/// A fully-connected layer: every neuron sees every input.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(input_size: usize, num_neurons: usize, rng: &mut R) -> Self {
        let neurons = (0..num_neurons)
            .map(|_| Neuron::new(input_size, rng))
            .collect();
        Layer { neurons }
    }

    /// Number of neurons, i.e. the layer's output arity.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, PositronError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
