//! Condition number of the augmented design matrix.
//!
//! The coefficient solve inverts `X'X` directly, whose condition number is
//! κ(X)². A large κ(X) therefore warns that the reported coefficients and
//! robust standard errors may have lost precision even when the inverse
//! succeeded.
//!
//! # Interpretation
//!
//! - κ < 30: Well-conditioned
//! - 30 ≤ κ < 100: Moderate collinearity
//! - 100 ≤ κ < 1000: High collinearity
//! - κ ≥ 1000: Severe collinearity
//!
//! # References
//!
//! - Belsley, D.A., Kuh, E. and Welsch, R.E. (1980). Regression Diagnostics.

use faer::Mat;
use serde::Serialize;

/// Condition number severity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionSeverity {
    /// κ < 30
    WellConditioned,
    /// 30 ≤ κ < 100
    Moderate,
    /// 100 ≤ κ < 1000
    High,
    /// κ ≥ 1000, or the SVD failed
    Severe,
}

impl ConditionSeverity {
    /// Human-readable description of the severity.
    pub fn description(&self) -> &'static str {
        match self {
            Self::WellConditioned => "well-conditioned",
            Self::Moderate => "moderate collinearity",
            Self::High => "high collinearity, coefficients may be unstable",
            Self::Severe => "severe collinearity, coefficients are likely unreliable",
        }
    }
}

/// Conditioning summary of a design matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionDiagnostic {
    /// σ_max / σ_min of the design matrix (∞ when rank deficient).
    pub condition_number: f64,
    /// Singular values, sorted descending.
    pub singular_values: Vec<f64>,
    pub severity: ConditionSeverity,
}

/// Condition number of `x` (already augmented with the constant column).
///
/// Returns `f64::INFINITY` when the SVD fails or the matrix is rank deficient.
pub fn condition_number(x: &Mat<f64>) -> f64 {
    condition_diagnostic(x).condition_number
}

/// Singular values, condition number and severity of `x`.
pub fn condition_diagnostic(x: &Mat<f64>) -> ConditionDiagnostic {
    let severe = ConditionDiagnostic {
        condition_number: f64::INFINITY,
        singular_values: vec![],
        severity: ConditionSeverity::Severe,
    };

    if x.nrows() == 0 || x.ncols() == 0 {
        return severe;
    }

    let svd = match x.svd() {
        Ok(svd) => svd,
        Err(_) => return severe,
    };
    let s_col = svd.S().column_vector();

    let mut singular_values: Vec<f64> = (0..s_col.nrows()).map(|i| s_col[i]).collect();
    if singular_values.is_empty() {
        return severe;
    }
    singular_values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let s_max = singular_values[0];
    let s_min = singular_values[singular_values.len() - 1];

    // Rank deficiency shows up as an exact or round-off sized σ_min.
    let condition_number = if s_min > s_max * f64::EPSILON {
        s_max / s_min
    } else {
        f64::INFINITY
    };

    ConditionDiagnostic {
        condition_number,
        singular_values,
        severity: classify_condition_number(condition_number),
    }
}

/// Classify a condition number into severity levels.
pub fn classify_condition_number(cond: f64) -> ConditionSeverity {
    if cond < 30.0 {
        ConditionSeverity::WellConditioned
    } else if cond < 100.0 {
        ConditionSeverity::Moderate
    } else if cond < 1000.0 {
        ConditionSeverity::High
    } else {
        ConditionSeverity::Severe
    }
}
