use crate::{
    error::Result,
    loss::mse::{compute_cost, compute_gradient},
    math::matrix::Matrix,
    model::linear::LinearParams,
    train::{
        loop_fn::{gradient_descent, TrainOutcome},
        observer::LogProgress,
        train_config::TrainConfig,
    },
};

/// Fits a linear model with the squared-error evaluators, logging progress
/// through `log` at the config's cadence.
pub fn train_linear_regression(
    x: &Matrix,
    y: &[f64],
    initial: &LinearParams,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    gradient_descent(x, y, initial, compute_cost, compute_gradient, config, &mut LogProgress)
}
