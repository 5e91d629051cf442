pub mod trainer;
pub mod iteration_stats;
pub mod observer;
pub mod train_config;
pub mod loop_fn;

pub use trainer::train_linear_regression;
pub use iteration_stats::IterationStats;
pub use observer::{LogProgress, ProgressObserver};
pub use train_config::TrainConfig;
pub use loop_fn::{gradient_descent, TrainOutcome};
