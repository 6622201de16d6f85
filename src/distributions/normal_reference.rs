//! Tabulated standard normal distribution used as a p-value lookup table.
//!
//! The density is evaluated on an evenly spaced grid and the cumulative
//! distribution is the left running sum of the density divided by the total
//! density mass on the grid:
//!
//! `cdf[i] = Σ_{j<i} pdf[j] / Σ_j pdf[j]`
//!
//! This is not the grid integral of the density; the normalization by total
//! mass is what makes `cdf` land in `[0, 1)`. P-values read from this table are
//! reproducible bit-for-bit across platforms that agree on `exp`, which is the
//! reason a closed-form error function is not used.
//!
//! The stored density uses the standard normal constant `1/(σ√(2π))`. The
//! "SND" curve from [`NormalReference::curves`] is therefore not comparable in
//! height with plots scaled by `1/(σ·2^(-2π))` ≈ 77.9; the shape is the same.
//! The cdf divides by total mass and does not depend on the constant.

use serde::Serialize;
use thiserror::Error;

/// Number of grid points in the default table.
pub const DEFAULT_GRID_POINTS: usize = 5000;
/// Lower end of the default grid.
pub const DEFAULT_LOWER: f64 = -5.0;
/// Upper end of the default grid.
pub const DEFAULT_UPPER: f64 = 5.0;

const MEAN: f64 = 0.0;
const STD_DEV: f64 = 1.0;

/// Invalid grid specification for a [`NormalReference`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("grid range [{lower}, {upper}] is empty or not finite")]
    InvalidRange { lower: f64, upper: f64 },
}

/// Discretized standard normal density and cumulative distribution.
///
/// Immutable after construction. Built once per regression engine.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalReference {
    x: Vec<f64>,
    pdf: Vec<f64>,
    cdf: Vec<f64>,
}

/// Curves for side-by-side plotting of the tabulated distribution.
///
/// `density` is the pdf scaled by `1 / n` so both panels share a comparable
/// vertical range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionCurves {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
    pub cdf: Vec<f64>,
}

impl NormalReference {
    /// Build the default table: 5000 points on `[-5, 5]`.
    pub fn new() -> Self {
        Self::build(DEFAULT_GRID_POINTS, DEFAULT_LOWER, DEFAULT_UPPER)
    }

    /// Build a table on a custom grid of `n` points covering `[lower, upper]`.
    pub fn with_grid(n: usize, lower: f64, upper: f64) -> Result<Self, GridError> {
        if n < 2 {
            return Err(GridError::TooFewPoints(n));
        }
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(GridError::InvalidRange { lower, upper });
        }
        Ok(Self::build(n, lower, upper))
    }

    fn build(n: usize, lower: f64, upper: f64) -> Self {
        let x = linspace(lower, upper, n);
        let pdf: Vec<f64> = x.iter().map(|&xi| normal_density(xi)).collect();

        let total: f64 = pdf.iter().sum();
        let mut cdf = Vec::with_capacity(n);
        let mut running = 0.0;
        for &p in &pdf {
            cdf.push(running / total);
            running += p;
        }

        Self { x, pdf, cdf }
    }

    /// Grid points, strictly increasing.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Density at each grid point.
    pub fn pdf(&self) -> &[f64] {
        &self.pdf
    }

    /// Left-cumulative mass at each grid point; `cdf()[0] == 0`.
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Two-tailed p-value for a test statistic.
    ///
    /// Scans from the middle of the grid down to index 0 and stops at the
    /// first grid point whose magnitude exceeds `|t|`; the p-value is twice the
    /// cumulative mass just before it. Statistics beyond the tabulated range
    /// give `0.0`. Only the lower half of the grid is ever visited.
    pub fn two_tailed_p_value(&self, t: f64) -> f64 {
        let t_abs = t.abs();
        for idx in (0..=self.len() / 2).rev() {
            if t_abs < self.x[idx].abs() {
                // cdf[0] is zero, so the first grid point maps to p = 0.
                return 2.0 * self.cdf[idx.saturating_sub(1)];
            }
        }
        0.0
    }

    /// Data feed for the "SND" and "CDF" diagnostic plots.
    pub fn curves(&self) -> DistributionCurves {
        let n = self.len() as f64;
        DistributionCurves {
            x: self.x.clone(),
            density: self.pdf.iter().map(|&p| p / n).collect(),
            cdf: self.cdf.clone(),
        }
    }
}

impl Default for NormalReference {
    fn default() -> Self {
        Self::new()
    }
}

/// Evenly spaced points with both endpoints included.
fn linspace(lower: f64, upper: f64, n: usize) -> Vec<f64> {
    let step = (upper - lower) / (n - 1) as f64;
    let mut x: Vec<f64> = (0..n).map(|i| lower + step * i as f64).collect();
    x[n - 1] = upper;
    x
}

fn normal_density(x: f64) -> f64 {
    let z = (x - MEAN) / STD_DEV;
    (-0.5 * z * z).exp() / (STD_DEV * (2.0 * std::f64::consts::PI).sqrt())
}
