use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::optim::gd::GradientDescent;

/// Configuration for a `gradient_descent` run.
///
/// # Fields
/// - `learning_rate` : step size α; the caller picks a stable value, the
///                     loop never checks for divergence
/// - `num_iters`     : exact number of full-batch iterations to run
/// - `progress_every`: observer cadence in iterations; `None` means
///                     ⌈num_iters / 10⌉
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub num_iters: usize,
    #[serde(default)]
    pub progress_every: Option<usize>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default progress cadence.
    pub fn new(learning_rate: f64, num_iters: usize) -> Self {
        TrainConfig {
            learning_rate,
            num_iters,
            progress_every: None,
        }
    }

    /// Overrides the observer cadence.
    pub fn progress_every(mut self, every: usize) -> Self {
        self.progress_every = Some(every);
        self
    }

    /// Effective cadence: iterations `0, c, 2c, ...` are reported. Never zero.
    pub fn cadence(&self) -> usize {
        self.progress_every
            .unwrap_or_else(|| self.num_iters.div_ceil(10))
            .max(1)
    }

    pub fn optimizer(&self) -> GradientDescent {
        GradientDescent::new(self.learning_rate)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinRegError;

    #[test]
    fn default_cadence_is_a_tenth_rounded_up() {
        assert_eq!(TrainConfig::new(0.1, 100_000).cadence(), 10_000);
        assert_eq!(TrainConfig::new(0.1, 15).cadence(), 2);
        assert_eq!(TrainConfig::new(0.1, 3).cadence(), 1);
    }

    #[test]
    fn cadence_is_never_zero() {
        assert_eq!(TrainConfig::new(0.1, 0).cadence(), 1);
        assert_eq!(TrainConfig::new(0.1, 50).progress_every(0).cadence(), 1);
    }

    #[test]
    fn explicit_cadence_wins() {
        assert_eq!(TrainConfig::new(0.1, 1000).progress_every(7).cadence(), 7);
    }

    #[test]
    fn json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.json");
        let path = path.to_str().unwrap();

        let config = TrainConfig::new(5.0e-7, 1000).progress_every(100);
        config.save_json(path).unwrap();
        assert_eq!(TrainConfig::load_json(path).unwrap(), config);
    }

    #[test]
    fn progress_every_may_be_omitted() {
        let config: TrainConfig =
            serde_json::from_str(r#"{ "learning_rate": 0.01, "num_iters": 20 }"#).unwrap();
        assert_eq!(config, TrainConfig::new(0.01, 20));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = TrainConfig::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LinRegError::Io(_)));
    }
}
