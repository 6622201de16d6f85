//! The tabulated normal distribution checked against `statrs`.
//!
//! The table is a left Riemann sum normalized by total mass, so it trails the
//! exact CDF by a few grid steps; tolerances reflect that.

use approx::assert_relative_eq;
use robust_ols::distributions::NormalReference;
use statrs::distribution::{ContinuousCDF, Normal};

#[test]
fn test_cdf_tracks_exact_normal() {
    let reference = NormalReference::new();
    let exact = Normal::new(0.0, 1.0).unwrap();

    for (i, (&x, &cdf)) in reference.x().iter().zip(reference.cdf()).enumerate() {
        if i % 250 != 0 {
            continue;
        }
        assert!(
            (cdf - exact.cdf(x)).abs() < 2e-3,
            "cdf({}) = {} vs exact {}",
            x,
            cdf,
            exact.cdf(x)
        );
    }
}

#[test]
fn test_p_values_track_exact_two_tailed() {
    let reference = NormalReference::new();
    let exact = Normal::new(0.0, 1.0).unwrap();

    for &t in &[0.25, 0.5, 1.0, 1.645, 1.96, 2.33, 2.576, 3.0, 3.5] {
        let p_exact = 2.0 * exact.cdf(-t);
        let p_table = reference.two_tailed_p_value(t);
        assert!(
            (p_table - p_exact).abs() < 5e-3,
            "t = {}: table {} vs exact {}",
            t,
            p_table,
            p_exact
        );
        // The lookup lands on a grid point left of -|t|.
        assert!(p_table <= p_exact);
    }
}

#[test]
fn test_conventional_thresholds() {
    let reference = NormalReference::new();
    assert_relative_eq!(reference.two_tailed_p_value(1.96), 0.0495, epsilon = 5e-4);
    assert_relative_eq!(reference.two_tailed_p_value(2.0), 0.0450, epsilon = 5e-4);
    assert_relative_eq!(reference.two_tailed_p_value(0.5), 0.6142, epsilon = 5e-4);
}

#[test]
fn test_table_is_deterministic() {
    let a = NormalReference::new();
    let b = NormalReference::default();
    assert_eq!(a, b);
}

#[test]
fn test_curves_feed() {
    let reference = NormalReference::new();
    let curves = reference.curves();

    assert_eq!(curves.x.len(), 5000);
    assert_eq!(curves.density.len(), 5000);
    assert_eq!(curves.cdf.len(), 5000);

    let json = serde_json::to_string(&curves).unwrap();
    assert!(json.starts_with("{\"x\":["));
}
