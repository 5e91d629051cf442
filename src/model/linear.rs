use serde::{Serialize, Deserialize};

use crate::error::{ensure_len, Result};
use crate::math::matrix::{dot, Matrix};

/// Parameters of a linear model `ŷ = w·x + b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearParams {
    pub fn new(weights: Vec<f64>, bias: f64) -> LinearParams {
        LinearParams { weights, bias }
    }

    /// All-zero weights and bias for `n_features` features.
    pub fn zeros(n_features: usize) -> LinearParams {
        LinearParams { weights: vec![0.0; n_features], bias: 0.0 }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Prediction for a single example.
    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        ensure_len("features", self.weights.len(), row.len())?;
        Ok(dot(&self.weights, row) + self.bias)
    }

    /// Predictions for every row of `x`, in row order.
    pub fn predict_batch(&self, x: &Matrix) -> Result<Vec<f64>> {
        x.check_shape()?;
        ensure_len("weights", x.cols, self.weights.len())?;
        Ok(x.iter_rows().map(|row| dot(&self.weights, row) + self.bias).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinRegError;

    #[test]
    fn predict_adds_bias_to_dot_product() {
        let params = LinearParams::new(vec![2.0, -1.0], 0.5);
        assert_eq!(params.predict(&[3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn predict_batch_follows_row_order() {
        let x = Matrix::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let params = LinearParams::new(vec![2.0], 1.0);
        assert_eq!(params.predict_batch(&x).unwrap(), vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn predict_batch_rejects_ragged_matrix() {
        let x = Matrix { rows: 2, cols: 2, data: vec![vec![1.0, 2.0], vec![3.0]] };
        let err = LinearParams::zeros(2).predict_batch(&x).unwrap_err();
        assert!(matches!(err, LinRegError::DimensionMismatch { context: "matrix row", .. }));
    }

    #[test]
    fn predict_rejects_wrong_feature_count() {
        let params = LinearParams::zeros(3);
        let err = params.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LinRegError::DimensionMismatch { expected: 3, actual: 2, .. }));
    }
}
