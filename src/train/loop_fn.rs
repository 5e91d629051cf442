use crate::error::Result;
use crate::loss::mse::Gradient;
use crate::math::matrix::Matrix;
use crate::model::linear::LinearParams;
use crate::train::iteration_stats::IterationStats;
use crate::train::observer::ProgressObserver;
use crate::train::train_config::TrainConfig;

/// Final parameters plus the cost recorded after every iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainOutcome {
    pub params: LinearParams,
    /// One entry per iteration; `loss_history.len() == num_iters`.
    pub loss_history: Vec<f64>,
}

impl TrainOutcome {
    pub fn final_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs exactly `config.num_iters` iterations of full-batch gradient descent
/// starting from a copy of `initial`.
///
/// # Arguments
/// - `x`, `y`     : design matrix (m × n) and targets (length m)
/// - `initial`    : starting parameters; never modified
/// - `cost_fn`    : evaluated on the updated parameters, once per iteration
/// - `gradient_fn`: evaluated on the pre-update parameters, once per iteration
/// - `config`     : learning rate, iteration count, progress cadence
/// - `observer`   : receives an `IterationStats` at iterations `0, c, 2c, ...`
///
/// # Errors
/// The first error from `gradient_fn`, `cost_fn` or the update aborts the run.
/// With `num_iters == 0` nothing is evaluated and `initial` is returned as is.
pub fn gradient_descent<C, G, O>(
    x: &Matrix,
    y: &[f64],
    initial: &LinearParams,
    cost_fn: C,
    gradient_fn: G,
    config: &TrainConfig,
    observer: &mut O,
) -> Result<TrainOutcome>
where
    C: Fn(&Matrix, &[f64], &LinearParams) -> Result<f64>,
    G: Fn(&Matrix, &[f64], &LinearParams) -> Result<Gradient>,
    O: ProgressObserver + ?Sized,
{
    let optimizer = config.optimizer();
    let cadence = config.cadence();

    let mut params = initial.clone();
    let mut loss_history = Vec::with_capacity(config.num_iters);

    log::debug!(
        "starting gradient descent: {} iterations, learning rate {}, {} rows x {} features",
        config.num_iters,
        config.learning_rate,
        x.rows,
        x.cols
    );

    for i in 0..config.num_iters {
        // Both partials come from the same snapshot before anything is written.
        let grad = gradient_fn(x, y, &params)?;
        optimizer.step(&mut params, &grad)?;

        let loss = cost_fn(x, y, &params)?;
        loss_history.push(loss);

        if i % cadence == 0 {
            observer.observe(&IterationStats {
                iteration: i,
                total_iters: config.num_iters,
                loss,
            });
        }
    }

    if let Some(last) = loss_history.last() {
        log::debug!("finished gradient descent: final loss {}", last);
    }

    Ok(TrainOutcome { params, loss_history })
}
