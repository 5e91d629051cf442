use std::sync::mpsc;

use crate::train::iteration_stats::IterationStats;

/// Receives progress reports from `gradient_descent`.
///
/// Observation is one-way: nothing an observer does can alter the run.
pub trait ProgressObserver {
    fn observe(&mut self, stats: &IterationStats);
}

/// Discards every report.
impl ProgressObserver for () {
    fn observe(&mut self, _stats: &IterationStats) {}
}

/// Emits `Iteration: <index>, loss: <value>` through the `log` facade at
/// `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn observe(&mut self, stats: &IterationStats) {
        log::info!("Iteration: {}, loss: {}", stats.iteration, stats.loss);
    }
}

/// Forwards reports over a channel. A dropped receiver is ignored; the run
/// still completes every iteration.
impl ProgressObserver for mpsc::Sender<IterationStats> {
    fn observe(&mut self, stats: &IterationStats) {
        let _ = self.send(stats.clone());
    }
}

impl<F> ProgressObserver for F
where
    F: FnMut(&IterationStats),
{
    fn observe(&mut self, stats: &IterationStats) {
        self(stats)
    }
}
