//! Pairwise Pearson correlation of the regressors.
//!
//! Used as a quick multicollinearity check next to the coefficient table.

use faer::Mat;
use serde::Serialize;
use std::fmt;

/// Symmetric correlation matrix with column labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    /// Row-major values; `values[i][j]` is corr(names[i], names[j]).
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two named regressors.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        Some(self.values[i][j])
    }

    /// Number of regressors.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Pearson correlation of every pair of columns of `x`.
///
/// `x` holds the raw regressors (no constant column). A column with zero
/// variance correlates as NaN with everything, itself included.
pub fn correlation_matrix(x: &Mat<f64>, names: &[String]) -> CorrelationMatrix {
    let n = x.nrows();
    let k = x.ncols();

    let means: Vec<f64> = (0..k)
        .map(|j| (0..n).map(|i| x[(i, j)]).sum::<f64>() / n as f64)
        .collect();

    let mut values = vec![vec![0.0; k]; k];
    for a in 0..k {
        for b in a..k {
            let mut sab = 0.0;
            let mut saa = 0.0;
            let mut sbb = 0.0;
            for i in 0..n {
                let da = x[(i, a)] - means[a];
                let db = x[(i, b)] - means[b];
                sab += da * db;
                saa += da * da;
                sbb += db * db;
            }
            let denom = (saa * sbb).sqrt();
            let r = if denom > 0.0 {
                (sab / denom).clamp(-1.0, 1.0)
            } else {
                f64::NAN
            };
            values[a][b] = r;
            values[b][a] = r;
        }
    }

    CorrelationMatrix {
        names: names.to_vec(),
        values,
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .names
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
            .max(9);

        write!(f, "{:width$}", "", width = width)?;
        for name in &self.names {
            write!(f, " {:>width$}", name, width = width)?;
        }
        writeln!(f)?;

        for (name, row) in self.names.iter().zip(&self.values) {
            write!(f, "{:<width$}", name, width = width)?;
            for v in row {
                write!(f, " {:>width$.6}", v, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
