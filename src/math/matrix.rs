use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{ensure_len, Result};

/// Row-major design matrix: `rows` training examples by `cols` features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform samples on [-1, 1) drawn from the supplied generator.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Builds a matrix from rows, taking the column count from the first row.
    /// Every row must have that same length.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        for row in &data {
            ensure_len("matrix row", cols, row.len())?;
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Verifies that `data` really holds `rows` rows of `cols` values each.
    pub fn check_shape(&self) -> Result<()> {
        ensure_len("matrix rows", self.rows, self.data.len())?;
        for row in &self.data {
            ensure_len("matrix row", self.cols, row.len())?;
        }
        Ok(())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(|row| row.as_slice())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
