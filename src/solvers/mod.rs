//! OLS fitting with robust inference.

mod error;
mod ols;

pub use error::{MatrixStage, RegressionError};
pub use ols::{FittedEngine, OlsFit, RegressionEngine};
