// src/nn/mod.rs
// Feed-forward composition built purely on the core operator set.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;
pub mod parameter;

// Re-export common items
pub use layer::Layer;
pub use losses::sse_loss;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
pub use parameter::Parameter;
