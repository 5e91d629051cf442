pub mod error;
pub mod math;
pub mod model;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{LinRegError, Result};
pub use math::matrix::Matrix;
pub use model::linear::LinearParams;
pub use loss::mse::{compute_cost, compute_gradient, Gradient};
pub use optim::gd::GradientDescent;
pub use train::{
    gradient_descent, train_linear_regression, IterationStats, LogProgress, ProgressObserver,
    TrainConfig, TrainOutcome,
};
