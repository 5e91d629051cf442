pub mod linear;

pub use linear::LinearParams;
