use crate::error::PositronError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building a fresh slice of output nodes wired
    /// into the computation graph.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, PositronError>;

    /// Returns every learnable parameter of the module, including those of
    /// sub-modules. The collection is order-stable across calls and contains
    /// only leaf nodes, never derived/intermediate ones.
    fn parameters(&self) -> Vec<Parameter>;

    /// Resets the gradient accumulator of every parameter to 0.0.
    ///
    /// Must be called before each new backward pass in a training loop,
    /// otherwise gradients accumulate across iterations.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
