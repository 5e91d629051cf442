pub mod mse;

pub use mse::{compute_cost, compute_gradient, Gradient};
