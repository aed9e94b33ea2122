// positron-core/src/nn/losses/sse.rs

use crate::error::PositronError;
use crate::value::Value;

/// Sum-of-squared-errors loss: Σ (prediction − target)².
///
/// Built entirely from `sub`/`pow`/`add` nodes, so the returned scalar is a
/// differentiable root: calling `backward()` on it propagates to every
/// parameter that contributed to any prediction.
pub fn sse_loss(predictions: &[Value], targets: &[f64]) -> Result<Value, PositronError> {
    if predictions.len() != targets.len() {
        return Err(PositronError::BatchSizeMismatch {
            predictions: predictions.len(),
            targets: targets.len(),
        });
    }

    Ok(predictions
        .iter()
        .zip(targets.iter())
        .map(|(prediction, &target)| (prediction - target).powf(2.0))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sse_forward() {
        let predictions = vec![Value::new(1.0), Value::new(-0.5)];
        let targets = vec![1.0, -1.0];
        let loss = sse_loss(&predictions, &targets).unwrap();
        // 0^2 + 0.5^2
        assert_relative_eq!(loss.data(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_sse_backward() {
        let predictions = vec![Value::new(0.5), Value::new(-0.5)];
        let targets = vec![1.0, -1.0];
        let loss = sse_loss(&predictions, &targets).unwrap();
        loss.backward();
        // d/dp (p - y)^2 = 2 (p - y)
        assert_relative_eq!(predictions[0].grad(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(predictions[1].grad(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sse_length_mismatch() {
        let predictions = vec![Value::new(0.0)];
        let err = sse_loss(&predictions, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            PositronError::BatchSizeMismatch {
                predictions: 1,
                targets: 2
            }
        );
    }

    #[test]
    fn test_sse_empty_batch_is_zero() {
        let loss = sse_loss(&[], &[]).unwrap();
        assert_eq!(loss.data(), 0.0);
    }
}
