pub mod housing;
pub mod synthetic;

pub use synthetic::linear_dataset;
