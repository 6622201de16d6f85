//! Core types for configuring and reporting a regression.

mod options;
mod report;

pub use options::{
    OptionsError, RegressionOptions, RegressionOptionsBuilder, DEFAULT_CONSTANT_NAME,
    DEFAULT_SINGULAR_TOLERANCE,
};
pub use report::{CoefficientRow, RegressionReport};
