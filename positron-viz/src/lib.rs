//! Rendering of finished computation graphs as Graphviz DOT text.
//!
//! This crate is a pure consumer of the engine: it only reads the per-node
//! `data`, `grad`, `label` and operator tag plus the operand relation, and
//! never influences gradient computation. The output is the `.dot` source;
//! feeding it to `dot -Tsvg` is left to the caller.

pub mod dot;

pub use dot::{to_dot, trace, RankDir};
