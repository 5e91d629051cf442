use ferrite_linreg::data::housing::{self, FEATURE_NAMES};
use ferrite_linreg::{train_linear_regression, LinearParams, TrainConfig};

fn main() -> ferrite_linreg::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (x, y) = housing::sample();
    let initial = LinearParams::zeros(x.cols);
    let config = TrainConfig::new(5.0e-7, 100_000);

    let outcome = train_linear_regression(&x, &y, &initial, &config)?;

    println!("b, w found by gradient descent: {:.4}, {:?}", outcome.params.bias, outcome.params.weights);
    for (name, w) in FEATURE_NAMES.iter().zip(outcome.params.weights.iter()) {
        println!("  {name:>12}: {w:.4}");
    }
    if let Some(loss) = outcome.final_loss() {
        println!("final loss = {loss:.4}");
    }

    for (row, target) in x.iter_rows().zip(y.iter()) {
        println!("prediction: {:.2}, target value: {}", outcome.params.predict(row)?, target);
    }

    Ok(())
}
