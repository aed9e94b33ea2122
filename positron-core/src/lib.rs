// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

// Ré-exporte les types les plus utilisés pour qu'ils soient accessibles
// directement via `positron_core::Value`
pub use error::PositronError;
pub use value::Value;
