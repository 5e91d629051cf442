use crate::math::matrix::Matrix;

/// Column names of the housing sample, in column order.
pub const FEATURE_NAMES: [&str; 4] = ["size (sqft)", "bedrooms", "floors", "age"];

/// Three houses described by size, bedrooms, floors and age, with their sale
/// prices in thousands of dollars.
pub fn sample() -> (Matrix, Vec<f64>) {
    let x = Matrix {
        rows: 3,
        cols: 4,
        data: vec![
            vec![2104.0, 5.0, 1.0, 45.0],
            vec![1416.0, 3.0, 2.0, 40.0],
            vec![852.0, 2.0, 1.0, 35.0],
        ],
    };
    let y = vec![460.0, 232.0, 178.0];
    (x, y)
}
