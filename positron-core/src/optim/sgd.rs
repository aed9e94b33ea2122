use crate::error::PositronError;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Plain stochastic gradient descent: `data += -lr * grad` on every parameter.
///
/// Updates go straight into the leaf nodes' `data`; intermediate nodes built
/// from the old values are untouched, so a new forward pass is needed before
/// the update is visible in any prediction.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over the given parameters with learning rate `lr`.
    pub fn new(params: Vec<Parameter>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), PositronError> {
        for param in &self.params {
            let update = -self.lr * param.grad();
            log::debug!(
                "sgd step: data={} grad={} update={}",
                param.data(),
                param.grad(),
                update
            );
            param.set_data(param.data() + update);
        }
        Ok(())
    }

    fn zero_grad(&self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
