use thiserror::Error;

/// Custom error type for the Positron framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum PositronError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Batch size mismatch: {predictions} predictions vs {targets} targets")]
    BatchSizeMismatch { predictions: usize, targets: usize },

    #[error("Training expects a single-output network, got {outputs} outputs")]
    NonScalarOutput { outputs: usize },

    #[error("Cannot build a network with no layers")]
    EmptyNetwork,

    #[error("Layer {index} has zero neurons")]
    EmptyLayer { index: usize },
    // Add more specific errors as needed
}
