//! t-statistics and two-tailed p-values for fitted coefficients.

use crate::distributions::NormalReference;
use faer::Col;
use serde::Serialize;
use std::fmt;

/// Why a coefficient's test statistic is not a usable number.
///
/// Attached to a single report row; the other rows are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatisticFlag {
    /// Standard error is exactly zero (perfect fit or zero-variance column).
    ZeroStdError,
    /// Standard error is NaN or infinite (negative variance estimate).
    NonFiniteStdError,
    /// t-statistic is NaN or infinite.
    NonFiniteTValue,
}

impl fmt::Display for StatisticFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ZeroStdError => "zero std err",
            Self::NonFiniteStdError => "non-finite std err",
            Self::NonFiniteTValue => "non-finite t",
        };
        f.write_str(s)
    }
}

/// Per-coefficient test results.
#[derive(Debug, Clone)]
pub struct CoefficientInference {
    pub t_values: Col<f64>,
    /// NaN for flagged coefficients.
    pub p_values: Col<f64>,
    pub flags: Vec<Option<StatisticFlag>>,
}

/// Compute `t_j = β_j / se_j` and look up two-tailed p-values.
pub fn coefficient_inference(
    coefficients: &Col<f64>,
    std_errors: &Col<f64>,
    reference: &NormalReference,
) -> CoefficientInference {
    let p = coefficients.nrows();
    let t_values = Col::from_fn(p, |j| coefficients[j] / std_errors[j]);

    let flags: Vec<Option<StatisticFlag>> = (0..p)
        .map(|j| classify(std_errors[j], t_values[j]))
        .collect();

    let p_values = Col::from_fn(p, |j| match flags[j] {
        Some(_) => f64::NAN,
        None => reference.two_tailed_p_value(t_values[j]),
    });

    CoefficientInference {
        t_values,
        p_values,
        flags,
    }
}

fn classify(std_error: f64, t_value: f64) -> Option<StatisticFlag> {
    if std_error == 0.0 {
        Some(StatisticFlag::ZeroStdError)
    } else if !std_error.is_finite() {
        Some(StatisticFlag::NonFiniteStdError)
    } else if !t_value.is_finite() {
        Some(StatisticFlag::NonFiniteTValue)
    } else {
        None
    }
}
