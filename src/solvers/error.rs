//! Errors raised while constructing or fitting a regression.

use std::fmt;
use thiserror::Error;

/// Which matrix inversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixStage {
    /// `X'X`, inverted for the coefficient solve.
    Gram,
    /// `X'X / N`, inverted for the robust sandwich covariance.
    ScaledGram,
}

impl fmt::Display for MatrixStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gram => write!(f, "X'X (coefficient solve)"),
            Self::ScaledGram => write!(f, "X'X / N (robust covariance)"),
        }
    }
}

/// Errors from [`RegressionEngine`](crate::solvers::RegressionEngine) and
/// [`FittedEngine`](crate::solvers::FittedEngine).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("at least one independent variable is required")]
    NoRegressors,

    #[error("expected {expected} regressor names, got {got}")]
    NameMismatch { expected: usize, got: usize },

    #[error("matrix {stage} is singular or numerically near-singular")]
    SingularMatrix { stage: MatrixStage },

    #[error(
        "degenerate sample size: n - k - 1 must be positive (n = {n}, k = {k})"
    )]
    DegenerateSampleSize { n: usize, k: usize },

    #[error("prediction input has {got} columns, model was fit with {expected}")]
    PredictionShape { expected: usize, got: usize },
}
