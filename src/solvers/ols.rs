//! Ordinary Least Squares with heteroskedasticity-robust inference.
//!
//! The engine has two states. [`RegressionEngine`] holds the raw observations;
//! [`RegressionEngine::fit`] consumes it, builds the design matrix with a
//! leading constant column, and returns a [`FittedEngine`]. Because the
//! transition takes `self` by value, a design matrix can never be augmented
//! twice.
//!
//! Coefficients are computed as `(X'X)^-1 X'y` with a direct inverse of the
//! Gram matrix. This is adequate for the handful of regressors this crate is
//! meant for. The singularity gate works on the unit-diagonal scaling of `X'X`,
//! so regressors in very different units fit normally; collinear designs are
//! reported through [`RegressionError::SingularMatrix`] and poor raw
//! conditioning through the condition number in the report.

use crate::core::{CoefficientRow, RegressionOptions, RegressionReport};
use crate::diagnostics::{condition_diagnostic, correlation_matrix, ConditionSeverity};
use crate::distributions::NormalReference;
use crate::inference::{
    coefficient_inference, robust_covariance, CoefficientInference, RobustCovariance,
};
use crate::solvers::{MatrixStage, RegressionError};
use crate::utils::{augment_with_constant, gram, invert_gram};
use faer::{Col, Mat};
use tracing::{debug, info, warn};

const DEFAULT_RESPONSE_NAME: &str = "y";

/// A regression problem that has not been fit yet.
///
/// # Example
///
/// ```rust,ignore
/// use robust_ols::solvers::RegressionEngine;
///
/// let y = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let if_new = [0.0, 0.0, 0.0, 1.0, 1.0];
///
/// let report = RegressionEngine::from_columns(&y, &[&if_new])?
///     .with_names("p2-p0", &["if_new"])?
///     .fit_and_report(true)?;
///
/// println!("{}", report);
/// ```
#[derive(Debug, Clone)]
pub struct RegressionEngine {
    y: Col<f64>,
    x: Mat<f64>,
    response_name: String,
    regressor_names: Vec<String>,
    options: RegressionOptions,
    reference: NormalReference,
}

impl RegressionEngine {
    /// Create an engine from a response vector and a regressor matrix.
    ///
    /// Both inputs are copied into fresh dense storage, so rows are matched
    /// purely by position `0..N`.
    ///
    /// # Errors
    /// * `DimensionMismatch` if `x` and `y` have different row counts
    /// * `NoRegressors` if `x` has no columns
    pub fn new(y: &Col<f64>, x: &Mat<f64>) -> Result<Self, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        if x.ncols() == 0 {
            return Err(RegressionError::NoRegressors);
        }

        let n = y.nrows();
        let k = x.ncols();
        Ok(Self {
            y: Col::from_fn(n, |i| y[i]),
            x: Mat::from_fn(n, k, |i, j| x[(i, j)]),
            response_name: DEFAULT_RESPONSE_NAME.to_string(),
            regressor_names: (1..=k).map(|j| format!("x{}", j)).collect(),
            options: RegressionOptions::default(),
            reference: NormalReference::new(),
        })
    }

    /// Create an engine from a response slice and one slice per regressor.
    pub fn from_columns(y: &[f64], columns: &[&[f64]]) -> Result<Self, RegressionError> {
        let n = y.len();
        if let Some(bad) = columns.iter().find(|c| c.len() != n) {
            return Err(RegressionError::DimensionMismatch {
                x_rows: bad.len(),
                y_len: n,
            });
        }

        let y_col = Col::from_fn(n, |i| y[i]);
        let x_mat = Mat::from_fn(n, columns.len(), |i, j| columns[j][i]);
        Self::new(&y_col, &x_mat)
    }

    /// Name the explained variable and the regressors (in column order).
    pub fn with_names(
        mut self,
        response: impl Into<String>,
        regressors: &[&str],
    ) -> Result<Self, RegressionError> {
        if regressors.len() != self.x.ncols() {
            return Err(RegressionError::NameMismatch {
                expected: self.x.ncols(),
                got: regressors.len(),
            });
        }
        self.response_name = response.into();
        self.regressor_names = regressors.iter().map(|s| s.to_string()).collect();
        Ok(self)
    }

    /// Replace the fitting options.
    pub fn with_options(mut self, options: RegressionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn n_observations(&self) -> usize {
        self.y.nrows()
    }

    /// Number of regressors, excluding the constant.
    pub fn n_regressors(&self) -> usize {
        self.x.ncols()
    }

    pub fn normal_reference(&self) -> &NormalReference {
        &self.reference
    }

    /// Fit the model.
    ///
    /// # Errors
    /// * `DegenerateSampleSize` if `N - k - 1 <= 0`
    /// * `SingularMatrix` if `X'X` (or `X'X / N`) cannot be inverted
    pub fn fit(self) -> Result<FittedEngine, RegressionError> {
        let n = self.n_observations();
        let k = self.n_regressors();
        info!(
            explained = %self.response_name,
            n_observations = n,
            n_regressors = k,
            "regression starts"
        );

        if n <= k + 1 {
            return Err(RegressionError::DegenerateSampleSize { n, k });
        }

        let tol = self.options.singular_tolerance;
        let design = augment_with_constant(&self.x);

        let gram_inv =
            invert_gram(&gram(&design), tol).ok_or(RegressionError::SingularMatrix {
                stage: MatrixStage::Gram,
            })?;
        let xty = design.transpose() * &self.y;
        let coefficients = &gram_inv * &xty;

        let fitted_values = &design * &coefficients;
        let residuals = &self.y - &fitted_values;
        let adj_r_squared = adjusted_r_squared(&self.y, &residuals, k);
        debug!(coefficients = ?coefficients, "coefficients solved");

        let robust = robust_covariance(&design, &residuals, tol)?;
        let inference = coefficient_inference(&coefficients, &robust.std_errors, &self.reference);

        let names = self.column_names();
        for (name, flag) in names.iter().zip(&inference.flags) {
            if let Some(flag) = flag {
                warn!(column = %name, %flag, "non-finite test statistic");
            }
        }

        info!(adj_r_squared, "regression finished");

        Ok(FittedEngine {
            fit: OlsFit {
                coefficients,
                fitted_values,
                residuals,
                adj_r_squared,
                robust,
                inference,
            },
            design,
            x: self.x,
            y: self.y,
            response_name: self.response_name,
            column_names: names,
            reference: self.reference,
        })
    }

    /// Fit the model and build its report in one step.
    pub fn fit_and_report(
        self,
        show_correlation: bool,
    ) -> Result<RegressionReport, RegressionError> {
        Ok(self.fit()?.report(show_correlation))
    }

    /// Constant name followed by the regressor names.
    fn column_names(&self) -> Vec<String> {
        std::iter::once(self.options.constant_name.clone())
            .chain(self.regressor_names.iter().cloned())
            .collect()
    }
}

/// Numerical results of a fit. Vectors over coefficients are indexed like the
/// design matrix columns: constant first.
#[derive(Debug, Clone)]
pub struct OlsFit {
    pub coefficients: Col<f64>,
    pub fitted_values: Col<f64>,
    pub residuals: Col<f64>,
    pub adj_r_squared: f64,
    pub robust: RobustCovariance,
    pub inference: CoefficientInference,
}

/// A fitted regression.
#[derive(Debug, Clone)]
pub struct FittedEngine {
    fit: OlsFit,
    design: Mat<f64>,
    x: Mat<f64>,
    y: Col<f64>,
    response_name: String,
    column_names: Vec<String>,
    reference: NormalReference,
}

impl FittedEngine {
    pub fn ols_fit(&self) -> &OlsFit {
        &self.fit
    }

    /// Coefficients, constant first.
    pub fn coefficients(&self) -> &Col<f64> {
        &self.fit.coefficients
    }

    pub fn std_errors(&self) -> &Col<f64> {
        &self.fit.robust.std_errors
    }

    pub fn t_values(&self) -> &Col<f64> {
        &self.fit.inference.t_values
    }

    pub fn p_values(&self) -> &Col<f64> {
        &self.fit.inference.p_values
    }

    pub fn residuals(&self) -> &Col<f64> {
        &self.fit.residuals
    }

    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fit.fitted_values
    }

    pub fn adj_r_squared(&self) -> f64 {
        self.fit.adj_r_squared
    }

    /// Design matrix with the constant column prepended.
    pub fn design(&self) -> &Mat<f64> {
        &self.design
    }

    pub fn normal_reference(&self) -> &NormalReference {
        &self.reference
    }

    pub fn n_observations(&self) -> usize {
        self.y.nrows()
    }

    pub fn n_regressors(&self) -> usize {
        self.x.ncols()
    }

    /// Column names, constant first.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Predict the response for new rows of the raw regressors.
    pub fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let k = self.n_regressors();
        if x.ncols() != k {
            return Err(RegressionError::PredictionShape {
                expected: k,
                got: x.ncols(),
            });
        }
        let beta = &self.fit.coefficients;
        Ok(Col::from_fn(x.nrows(), |i| {
            beta[0] + (0..k).map(|j| beta[j + 1] * x[(i, j)]).sum::<f64>()
        }))
    }

    /// Assemble the report table.
    ///
    /// With `show_correlation` the report also carries the correlation matrix
    /// of the regressors, constant excluded.
    pub fn report(&self, show_correlation: bool) -> RegressionReport {
        let fit = &self.fit;
        let coefficients = self
            .column_names
            .iter()
            .enumerate()
            .map(|(j, name)| CoefficientRow {
                name: name.clone(),
                coefficient: fit.coefficients[j],
                std_error: fit.robust.std_errors[j],
                t_value: fit.inference.t_values[j],
                p_value: fit.inference.p_values[j],
                flag: fit.inference.flags[j],
            })
            .collect();

        let correlation = show_correlation
            .then(|| correlation_matrix(&self.x, &self.column_names[1..]));

        let conditioning = condition_diagnostic(&self.design);
        if conditioning.severity == ConditionSeverity::Severe {
            warn!(
                condition_number = conditioning.condition_number,
                "{}",
                conditioning.severity.description()
            );
        }

        RegressionReport {
            explained_variable: self.response_name.clone(),
            adj_r_squared: fit.adj_r_squared,
            n_observations: self.n_observations(),
            coefficients,
            correlation,
            conditioning,
        }
    }
}

/// `1 - (N - 1) / (N - k - 1) · RSS / TSS`, with `k` excluding the constant.
///
/// Callers guarantee `N - k - 1 > 0`. A constant response makes TSS zero and
/// the result non-finite.
fn adjusted_r_squared(y: &Col<f64>, residuals: &Col<f64>, k: usize) -> f64 {
    let n = y.nrows();
    let y_mean = (0..n).map(|i| y[i]).sum::<f64>() / n as f64;
    let tss: f64 = (0..n).map(|i| (y[i] - y_mean).powi(2)).sum();
    let rss: f64 = (0..n).map(|i| residuals[i].powi(2)).sum();
    1.0 - ((n - 1) as f64 / (n - k - 1) as f64) * (rss / tss)
}
