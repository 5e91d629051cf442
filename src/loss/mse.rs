use crate::error::{ensure_len, Result};
use crate::math::matrix::{dot, Matrix};
use crate::model::linear::LinearParams;

/// Partial derivatives of the cost: ∂J/∂w (one per feature) and ∂J/∂b.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub weights: Vec<f64>,
    pub bias: f64,
}

fn check_shapes(x: &Matrix, y: &[f64], params: &LinearParams) -> Result<()> {
    x.check_shape()?;
    ensure_len("weights", x.cols, params.weights.len())?;
    ensure_len("targets", x.rows, y.len())
}

/// Squared-error cost: J = Σ(w·xᵢ + b − yᵢ)² / 2m
///
/// An empty design matrix yields NaN.
pub fn compute_cost(x: &Matrix, y: &[f64], params: &LinearParams) -> Result<f64> {
    check_shapes(x, y, params)?;

    let m = x.rows as f64;
    let total: f64 = x.iter_rows().zip(y.iter())
        .map(|(row, target)| (dot(&params.weights, row) + params.bias - target).powi(2))
        .sum();

    Ok(total / (2.0 * m))
}

/// Gradient of `compute_cost`:
///   ∂J/∂wⱼ = Σ(w·xᵢ + b − yᵢ)·xᵢⱼ / m
///   ∂J/∂b  = Σ(w·xᵢ + b − yᵢ) / m
///
/// Accumulates row by row, features innermost.
pub fn compute_gradient(x: &Matrix, y: &[f64], params: &LinearParams) -> Result<Gradient> {
    check_shapes(x, y, params)?;

    let mut dj_dw = vec![0.0; x.cols];
    let mut dj_db = 0.0;

    for (row, target) in x.iter_rows().zip(y.iter()) {
        let err = dot(&params.weights, row) + params.bias - target;
        for (acc, feature) in dj_dw.iter_mut().zip(row.iter()) {
            *acc += err * feature;
        }
        dj_db += err;
    }

    let m = x.rows as f64;
    for acc in dj_dw.iter_mut() {
        *acc /= m;
    }

    Ok(Gradient { weights: dj_dw, bias: dj_db / m })
}
