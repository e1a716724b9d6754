//! Errors raised where values enter from Python or from polars columns.

use polars::prelude::{polars_err, PolarsError};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use pyo3_polars::error::PyPolarsErr;
use thiserror::Error;

/// Result type alias for similarity operations.
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Which operand of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Left => f.write_str("s1"),
            Operand::Right => f.write_str("s2"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SimilarityError {
    /// An operand was absent where a string is required.
    #[error("invalid argument: {operand} must be a string, got None")]
    NullInput { operand: Operand },

    /// Two columns cannot be paired row by row.
    #[error("cannot compare columns of length {lhs} and {rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },

    #[error("similarity expects {expected} string inputs, got {got}")]
    InputCount { expected: usize, got: usize },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl From<SimilarityError> for PolarsError {
    fn from(err: SimilarityError) -> Self {
        match err {
            SimilarityError::Polars(e) => e,
            err @ SimilarityError::LengthMismatch { .. } => polars_err!(ShapeMismatch: "{}", err),
            other => polars_err!(ComputeError: "{}", other),
        }
    }
}

impl From<SimilarityError> for PyErr {
    fn from(err: SimilarityError) -> Self {
        match err {
            SimilarityError::Polars(e) => PyPolarsErr::from(e).into(),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
