use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf `Value` indicating it is a learnable parameter of a
/// `Module`. Only parameters ever get optimizer updates; the type distinction
/// keeps derived/intermediate nodes out of `parameters()` collections.
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new Parameter from a leaf Value.
    pub fn new(value: Value) -> Self {
        debug_assert!(value.is_leaf(), "parameters must be leaf nodes");
        Parameter(value)
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the underlying Value (shallow clone via Rc),
    /// so optimizer updates through one clone are visible through all.
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}
