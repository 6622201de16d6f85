//! Heteroskedasticity-consistent (White) covariance of OLS coefficients.
//!
//! The sandwich is assembled from moment matrices scaled by the sample size:
//!
//! `V̂ = (X'X / N)^-1 · [X' diag(e²) X / (N - k - 1)] · (X'X / N)^-1`
//!
//! and the standard error of coefficient j is `sqrt(V̂_jj / N)`. Expanding the
//! scale factors shows this equals the HC1 estimator
//! `N / (N - p) · (X'X)^-1 X' Ω X (X'X)^-1` with `p = k + 1`.
//!
//! Only the diagonal of `V̂` is kept.
//!
//! # References
//!
//! - White, H. (1980). "A Heteroskedasticity-Consistent Covariance Matrix Estimator
//!   and a Direct Test for Heteroskedasticity." *Econometrica*, 48(4), 817–838.
//! - MacKinnon, J.G. & White, H. (1985). "Some Heteroskedasticity-Consistent
//!   Covariance Matrix Estimators with Improved Finite Sample Properties."
//!   *Journal of Econometrics*, 29(3), 305–325.

use crate::solvers::{MatrixStage, RegressionError};
use crate::utils::{gram, invert_gram, weighted_gram};
use faer::{Col, Mat, Scale};

/// Diagonal of the robust covariance and the resulting standard errors.
#[derive(Debug, Clone)]
pub struct RobustCovariance {
    /// `V̂_jj` for each column of the design matrix.
    pub variances: Col<f64>,
    /// `sqrt(V̂_jj / N)`; NaN where the variance came out negative.
    pub std_errors: Col<f64>,
}

/// Compute robust standard errors for an OLS fit.
///
/// # Arguments
/// * `design` - Augmented design matrix (N × (k + 1)), constant column first
/// * `residuals` - OLS residuals (N)
/// * `tolerance` - Reciprocal condition threshold for the scaled `X'X / N`
///
/// # Errors
/// * `DegenerateSampleSize` when `N - k - 1 <= 0`
/// * `SingularMatrix { stage: ScaledGram }` when `X'X / N` cannot be inverted
pub fn robust_covariance(
    design: &Mat<f64>,
    residuals: &Col<f64>,
    tolerance: f64,
) -> Result<RobustCovariance, RegressionError> {
    let n = design.nrows();
    let p = design.ncols();
    if n <= p {
        return Err(RegressionError::DegenerateSampleSize {
            n,
            k: p.saturating_sub(1),
        });
    }
    let n_f = n as f64;
    let df = (n - p) as f64;

    let scaled_gram = Scale(1.0 / n_f) * &gram(design);
    let bread = invert_gram(&scaled_gram, tolerance).ok_or(RegressionError::SingularMatrix {
        stage: MatrixStage::ScaledGram,
    })?;

    let omega = Col::from_fn(n, |i| residuals[i] * residuals[i]);
    let meat = Scale(1.0 / df) * &weighted_gram(design, &omega);

    let vcov = &(&bread * &meat) * &bread;

    let variances = Col::from_fn(p, |j| vcov[(j, j)]);
    let std_errors = Col::from_fn(p, |j| (variances[j] / n_f).sqrt());

    Ok(RobustCovariance {
        variances,
        std_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::augment_with_constant;
    use approx::assert_relative_eq;

    /// Closed-form simple regression fit, returning (design, residuals).
    fn simple_fit(x_data: &[f64], y_data: &[f64]) -> (Mat<f64>, Col<f64>) {
        let n = x_data.len();
        let x_mean: f64 = x_data.iter().sum::<f64>() / n as f64;
        let y_mean: f64 = y_data.iter().sum::<f64>() / n as f64;

        let mut ss_xy = 0.0;
        let mut ss_xx = 0.0;
        for i in 0..n {
            ss_xy += (x_data[i] - x_mean) * (y_data[i] - y_mean);
            ss_xx += (x_data[i] - x_mean) * (x_data[i] - x_mean);
        }
        let beta1 = ss_xy / ss_xx;
        let beta0 = y_mean - beta1 * x_mean;

        let x = Mat::from_fn(n, 1, |i, _| x_data[i]);
        let residuals = Col::from_fn(n, |i| y_data[i] - beta0 - beta1 * x_data[i]);
        (augment_with_constant(&x), residuals)
    }

    #[test]
    fn test_matches_hc1_reference() {
        // R: sqrt(diag(sandwich::vcovHC(lm(y ~ x), type = "HC1")))
        let x_data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y_data = [2.1, 4.3, 5.8, 8.2, 9.9];
        let (design, residuals) = simple_fit(&x_data, &y_data);

        let cov = robust_covariance(&design, &residuals, 1e-12).unwrap();

        assert_relative_eq!(cov.std_errors[0], 0.15796, epsilon = 1e-4);
        assert_relative_eq!(cov.std_errors[1], 0.04103, epsilon = 1e-4);
    }

    #[test]
    fn test_heteroskedastic_data_positive_errors() {
        let x_data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let y_data = [5.1, 7.8, 11.3, 13.6, 17.5, 19.8, 23.7, 25.2, 29.9, 31.4];
        let (design, residuals) = simple_fit(&x_data, &y_data);

        let cov = robust_covariance(&design, &residuals, 1e-12).unwrap();

        for j in 0..2 {
            assert!(cov.std_errors[j] > 0.0);
            assert!(cov.std_errors[j].is_finite());
            assert_relative_eq!(
                cov.std_errors[j] * cov.std_errors[j],
                cov.variances[j] / 10.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_zero_residuals_give_zero_errors() {
        let x = Mat::from_fn(6, 1, |i, _| i as f64);
        let design = augment_with_constant(&x);
        let residuals = Col::zeros(6);

        let cov = robust_covariance(&design, &residuals, 1e-12).unwrap();
        assert_eq!(cov.std_errors[0], 0.0);
        assert_eq!(cov.std_errors[1], 0.0);
    }

    #[test]
    fn test_degenerate_sample_size() {
        let x = Mat::from_fn(2, 1, |i, _| i as f64);
        let design = augment_with_constant(&x);
        let residuals = Col::zeros(2);

        assert_eq!(
            robust_covariance(&design, &residuals, 1e-12).unwrap_err(),
            RegressionError::DegenerateSampleSize { n: 2, k: 1 }
        );
    }

    #[test]
    fn test_singular_scaled_gram() {
        let x = Mat::from_fn(8, 2, |i, _| i as f64);
        let design = augment_with_constant(&x);
        let residuals = Col::from_fn(8, |i| if i % 2 == 0 { 0.5 } else { -0.5 });

        assert_eq!(
            robust_covariance(&design, &residuals, 1e-12).unwrap_err(),
            RegressionError::SingularMatrix {
                stage: MatrixStage::ScaledGram
            }
        );
    }
}
