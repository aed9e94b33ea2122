use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Tag of the operation that produced a node.
///
/// Carried on every node for diagnostics and graph rendering; the actual
/// gradient rule lives in the node's `grad_fn`. `Pow` keeps its constant
/// exponent so the tag can be displayed as e.g. `^2`.
///
/// Subtraction, negation and division never appear here: they are defined
/// purely in terms of `Add`, `Mul` and `Pow`, so that is what their graphs
/// are made of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Tanh,
    Exp,
}

impl Op {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "^{}", exponent),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
        }
    }
}
