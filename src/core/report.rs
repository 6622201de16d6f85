//! Regression report: the coefficient table and fit summary.

use crate::diagnostics::{ConditionDiagnostic, CorrelationMatrix};
use crate::inference::StatisticFlag;
use serde::Serialize;
use std::fmt;

/// One row of the two-tailed t-test table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientRow {
    pub name: String,
    pub coefficient: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
    /// Set when the statistics of this row are not usable numbers.
    pub flag: Option<StatisticFlag>,
}

impl CoefficientRow {
    /// True when the row carries usable t and p values.
    pub fn is_finite(&self) -> bool {
        self.flag.is_none()
    }
}

/// Output of a fit: explained variable, adjusted R² and the coefficient table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionReport {
    pub explained_variable: String,
    pub adj_r_squared: f64,
    pub n_observations: usize,
    /// Constant first, then regressors in input order.
    pub coefficients: Vec<CoefficientRow>,
    /// Present when the correlation matrix was requested.
    pub correlation: Option<CorrelationMatrix>,
    pub conditioning: ConditionDiagnostic,
}

impl RegressionReport {
    /// Adjusted R² rounded to 4 decimal places for display.
    pub fn adj_r_squared_rounded(&self) -> f64 {
        (self.adj_r_squared * 1e4).round() / 1e4
    }

    /// Look up a row by name.
    pub fn row(&self, name: &str) -> Option<&CoefficientRow> {
        self.coefficients.iter().find(|r| r.name == name)
    }

    /// Rows whose statistics were flagged as non-finite.
    pub fn flagged_rows(&self) -> impl Iterator<Item = &CoefficientRow> {
        self.coefficients.iter().filter(|r| !r.is_finite())
    }

    /// Serialize the report as pretty-printed JSON. Non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Explained variable: {}\n", self.explained_variable)?;
        writeln!(
            f,
            "Adjusted R-squared: {}\n",
            self.adj_r_squared_rounded()
        )?;
        writeln!(f, "Two-tailed t-test results:\n")?;

        let name_width = self
            .coefficients
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(0)
            .max(4);

        writeln!(
            f,
            "{:<nw$} {:>12} {:>12} {:>12} {:>12}",
            "Name",
            "Coef",
            "Std Err",
            "t-value",
            "p-value",
            nw = name_width
        )?;
        for row in &self.coefficients {
            write!(
                f,
                "{:<nw$} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                row.name,
                row.coefficient,
                row.std_error,
                row.t_value,
                row.p_value,
                nw = name_width
            )?;
            if let Some(flag) = row.flag {
                write!(f, "  [{}]", flag)?;
            }
            writeln!(f)?;
        }

        if let Some(corr) = &self.correlation {
            writeln!(f, "\nCorrelation between independent variables:\n")?;
            write!(f, "{}", corr)?;
        }
        Ok(())
    }
}
