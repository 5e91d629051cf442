use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::math::matrix::{dot, Matrix};
use crate::model::linear::LinearParams;

/// Generates `rows` examples with features uniform on [-1, 1) and targets
/// `true_params.predict(row) + noise·u`, u uniform on [-1, 1).
///
/// The same `seed` always produces the same dataset.
pub fn linear_dataset(
    rows: usize,
    true_params: &LinearParams,
    noise: f64,
    seed: u64,
) -> (Matrix, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = Matrix::random(rows, true_params.n_features(), &mut rng);

    let y = x.iter_rows()
        .map(|row| {
            let clean = dot(&true_params.weights, row) + true_params.bias;
            clean + noise * rng.gen_range(-1.0..1.0)
        })
        .collect();

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_follow_the_parameters() {
        let params = LinearParams::new(vec![1.0, 2.0, 3.0], 0.5);
        let (x, y) = linear_dataset(20, &params, 0.1, 1);
        assert_eq!(x.shape(), (20, 3));
        assert_eq!(y.len(), 20);
    }

    #[test]
    fn same_seed_same_data() {
        let params = LinearParams::new(vec![-1.0, 4.0], 2.0);
        assert_eq!(linear_dataset(8, &params, 0.3, 42), linear_dataset(8, &params, 0.3, 42));
        assert_ne!(linear_dataset(8, &params, 0.3, 42), linear_dataset(8, &params, 0.3, 43));
    }

    #[test]
    fn noiseless_targets_are_exact_predictions() {
        let params = LinearParams::new(vec![0.5, -2.0], 1.5);
        let (x, y) = linear_dataset(10, &params, 0.0, 3);
        for (row, target) in x.iter_rows().zip(y.iter()) {
            assert!((params.predict(row).unwrap() - target).abs() < 1e-12);
        }
    }
}
