//! OLS multiple regression with heteroskedasticity-robust inference.
//!
//! Fits `y = β₀ + β₁x₁ + … + βₖxₖ` by ordinary least squares and reports
//! adjusted R², White (HC1) standard errors, t-statistics and two-tailed
//! p-values. P-values are read from a standard normal distribution tabulated
//! on a fixed grid ([`distributions::NormalReference`]) rather than computed
//! from a closed-form CDF, so results are reproducible across platforms.
//!
//! # Example
//!
//! ```rust,ignore
//! use robust_ols::prelude::*;
//!
//! let report = RegressionEngine::from_columns(&price_diff, &[&if_new])?
//!     .with_names("p2-p0", &["if_new"])?
//!     .fit_and_report(true)?;
//!
//! println!("{}", report);
//! let slope = report.row("if_new").unwrap();
//! println!("p = {:.4}", slope.p_value);
//! ```

pub mod core;
pub mod diagnostics;
pub mod distributions;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CoefficientRow, OptionsError, RegressionOptions, RegressionOptionsBuilder,
        RegressionReport,
    };
    pub use crate::diagnostics::{
        condition_diagnostic, correlation_matrix, ConditionDiagnostic, ConditionSeverity,
        CorrelationMatrix,
    };
    pub use crate::distributions::{DistributionCurves, NormalReference};
    pub use crate::inference::StatisticFlag;
    pub use crate::solvers::{
        FittedEngine, MatrixStage, OlsFit, RegressionEngine, RegressionError,
    };
}

pub use crate::core::{CoefficientRow, RegressionOptions, RegressionReport};
pub use crate::distributions::NormalReference;
pub use crate::solvers::{FittedEngine, MatrixStage, RegressionEngine, RegressionError};
