use crate::error::{ensure_len, Result};
use crate::loss::mse::Gradient;
use crate::model::linear::LinearParams;

/// Plain full-batch gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Applies one update to `params` from a gradient that was computed
    /// entirely against the current (pre-update) values.
    pub fn step(&self, params: &mut LinearParams, grad: &Gradient) -> Result<()> {
        ensure_len("gradient", params.weights.len(), grad.weights.len())?;

        let lr = self.learning_rate;
        for (w, g) in params.weights.iter_mut().zip(grad.weights.iter()) {
            *w -= lr * g;
        }
        params.bias -= lr * grad.bias;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinRegError;

    #[test]
    fn step_moves_against_the_gradient() {
        let mut params = LinearParams::new(vec![1.0, -2.0], 0.5);
        let grad = Gradient { weights: vec![10.0, -20.0], bias: 4.0 };

        GradientDescent::new(0.1).step(&mut params, &grad).unwrap();

        assert_eq!(params.weights, vec![0.0, 0.0]);
        assert!((params.bias - 0.1).abs() < 1e-12);
    }

    #[test]
    fn step_rejects_mismatched_gradient() {
        let mut params = LinearParams::zeros(2);
        let grad = Gradient { weights: vec![1.0], bias: 0.0 };

        let err = GradientDescent::new(0.1).step(&mut params, &grad).unwrap_err();
        assert!(matches!(err, LinRegError::DimensionMismatch { expected: 2, actual: 1, .. }));
        assert_eq!(params, LinearParams::zeros(2));
    }
}
