//! Dense linear algebra helpers over `faer` storage.
//!
//! Products go through `faer`'s matmul operators. Gram matrices are inverted
//! directly with a partial-pivoting LU after a symmetric diagonal scaling, so
//! the singularity gate does not depend on the units of the regressors.

use faer::linalg::solvers::DenseSolveCore;
use faer::{Col, Mat};

/// Prepend a column of ones to `x`.
pub fn augment_with_constant(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Gram matrix `X'X`.
pub fn gram(x: &Mat<f64>) -> Mat<f64> {
    x.transpose() * x
}

/// Weighted Gram matrix `X' diag(w) X`.
pub fn weighted_gram(x: &Mat<f64>, w: &Col<f64>) -> Mat<f64> {
    let wx = Mat::from_fn(x.nrows(), x.ncols(), |i, j| w[i] * x[(i, j)]);
    x.transpose() * &wx
}

/// Invert a symmetric positive semi-definite matrix such as `X'X`.
///
/// The matrix is first scaled to unit diagonal, `B = D A D` with
/// `D = diag(1 / sqrt(a_jj))`. It is treated as singular when any entry is
/// non-finite, a diagonal entry is not positive, or `σ_min(B) / σ_max(B)` is
/// at most `tolerance`. Otherwise `A^-1 = D B^-1 D`, with `B^-1` taken from
/// an LU factorization with partial pivoting.
///
/// Rescaling a regressor rescales a row and column of `A` and leaves `B`
/// unchanged, so the decision is independent of measurement units.
pub fn invert_gram(a: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    let p = a.nrows();
    if p != a.ncols() || p == 0 {
        return None;
    }
    if !all_finite(a) || (0..p).any(|j| a[(j, j)] <= 0.0) {
        return None;
    }

    let d = Col::from_fn(p, |j| a[(j, j)].sqrt().recip());
    let b = Mat::from_fn(p, p, |i, j| d[i] * a[(i, j)] * d[j]);
    if reciprocal_condition(&b)? <= tolerance {
        return None;
    }

    let b_inv = b.partial_piv_lu().inverse();
    let inv = Mat::from_fn(p, p, |i, j| d[i] * b_inv[(i, j)] * d[j]);
    all_finite(&inv).then_some(inv)
}

/// `σ_min / σ_max`, or `None` if the SVD does not converge.
fn reciprocal_condition(b: &Mat<f64>) -> Option<f64> {
    let svd = b.svd().ok()?;
    let s = svd.S().column_vector();
    let (mut s_min, mut s_max) = (f64::INFINITY, 0.0_f64);
    for i in 0..s.nrows() {
        s_min = s_min.min(s[i]);
        s_max = s_max.max(s[i]);
    }
    if s_max > 0.0 {
        Some(s_min / s_max)
    } else {
        Some(0.0)
    }
}

fn all_finite(a: &Mat<f64>) -> bool {
    (0..a.ncols()).all(|j| (0..a.nrows()).all(|i| a[(i, j)].is_finite()))
}
