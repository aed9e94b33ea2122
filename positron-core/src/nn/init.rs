use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draws a fresh leaf from U(low, high).
///
/// Callers thread their own `Rng` through so tests can seed a `StdRng` and get
/// reproducible networks.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Value {
    Value::new(rng.gen_range(low..=high))
}

/// Draws a fresh leaf from N(mean, std_dev).
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> Value {
    let dist = Normal::new(mean, std_dev).expect("std_dev must be finite and non-negative");
    Value::new(dist.sample(rng))
}
