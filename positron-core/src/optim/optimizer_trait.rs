use crate::error::PositronError;

/// Common interface of parameter optimizers.
pub trait Optimizer {
    /// Applies one update step using the gradients currently stored on the
    /// managed parameters. Call after `backward()` has run on a loss node.
    fn step(&mut self) -> Result<(), PositronError>;

    /// Resets the gradient accumulator of every managed parameter to 0.0.
    /// Call before each backward pass to avoid cross-iteration accumulation.
    fn zero_grad(&self);
}
