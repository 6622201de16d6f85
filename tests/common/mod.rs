//! Common test utilities and data generators.

use faer::{Col, Mat};

/// Generate linear data: y = intercept + Σ (j + 1) · x_j + noise.
///
/// Returns the regressors, the response and the true slopes.
#[allow(dead_code)]
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let true_slopes = Col::from_fn(n_features, |j| (j + 1) as f64);
    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_slopes[j];
        }
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y, true_slopes)
}

/// Generate data whose noise grows with the regressor (heteroskedastic).
#[allow(dead_code)]
pub fn generate_heteroskedastic_data(n_samples: usize, seed: u64) -> (Mat<f64>, Col<f64>) {
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Mat::zeros(n_samples, 1);
    let mut y = Col::zeros(n_samples);
    for i in 0..n_samples {
        let xi = (i + 1) as f64;
        x[(i, 0)] = xi;
        y[i] = 1.0 + 0.5 * xi + 0.3 * xi * next_rand(&mut rng_state);
    }
    (x, y)
}

/// Generate data with two perfectly collinear regressors.
#[allow(dead_code)]
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 2);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = i as f64; // Identical to x0
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 0.1 * ((i % 3) as f64);
    }

    (x, y)
}

/// Approximate equality check for floating point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
