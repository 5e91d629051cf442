//! Error types for the regression library.

use thiserror::Error;

/// Errors produced by the evaluators, the optimizer and config I/O.
#[derive(Debug, Error)]
pub enum LinRegError {
    /// Matrix/vector shapes disagree, e.g. a weight vector whose length is
    /// not the column count of the design matrix.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinRegError>;

/// Returns `DimensionMismatch` unless `actual == expected`.
pub(crate) fn ensure_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(LinRegError::DimensionMismatch { context, expected, actual });
    }
    Ok(())
}
