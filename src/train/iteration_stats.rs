use serde::{Serialize, Deserialize};

/// Progress report handed to a `ProgressObserver` at each cadence checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 0-based iteration index.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iters: usize,
    /// Cost after this iteration's update.
    pub loss: f64,
}
