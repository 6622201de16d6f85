//! Configuration for fitting a regression.

use thiserror::Error;

/// Default name of the prepended constant column.
pub const DEFAULT_CONSTANT_NAME: &str = "const";
/// Default reciprocal condition threshold for Gram matrix inversion.
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Invalid option values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("singular tolerance must be finite and in [0, 1), got {0}")]
    InvalidTolerance(f64),
    #[error("constant column name must not be empty")]
    EmptyConstantName,
}

/// Options controlling how a regression is fit and labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionOptions {
    /// Name given to the constant column in the report.
    pub constant_name: String,
    /// A Gram matrix whose unit-diagonal scaling has `σ_min / σ_max` at or
    /// below this value is singular.
    pub singular_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            constant_name: DEFAULT_CONSTANT_NAME.to_string(),
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }
}

impl RegressionOptions {
    /// Create a builder for configuring options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }
}

/// Builder for [`RegressionOptions`].
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Name of the constant column. Default is `"const"`.
    pub fn constant_name(mut self, name: impl Into<String>) -> Self {
        self.options.constant_name = name.into();
        self
    }

    /// Reciprocal condition threshold for matrix inversion. Default is 1e-12.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Validate and build the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        let tol = self.options.singular_tolerance;
        if !tol.is_finite() || !(0.0..1.0).contains(&tol) {
            return Err(OptionsError::InvalidTolerance(tol));
        }
        if self.options.constant_name.is_empty() {
            return Err(OptionsError::EmptyConstantName);
        }
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RegressionOptions::builder().build().unwrap();
        assert_eq!(opts.constant_name, "const");
        assert_eq!(opts.singular_tolerance, 1e-12);
        assert_eq!(opts, RegressionOptions::default());
    }

    #[test]
    fn test_builder_overrides() {
        let opts = RegressionOptions::builder()
            .constant_name("_constant_")
            .singular_tolerance(1e-9)
            .build()
            .unwrap();
        assert_eq!(opts.constant_name, "_constant_");
        assert_eq!(opts.singular_tolerance, 1e-9);
    }

    #[test]
    fn test_invalid_tolerance() {
        for tol in [-1.0, 1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                RegressionOptions::builder().singular_tolerance(tol).build(),
                Err(OptionsError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_empty_constant_name() {
        assert_eq!(
            RegressionOptions::builder().constant_name("").build(),
            Err(OptionsError::EmptyConstantName)
        );
    }
}
