//! Statistical inference (robust standard errors, t-statistics, p-values).

mod coefficient;
mod robust_covariance;

pub use coefficient::{coefficient_inference, CoefficientInference, StatisticFlag};
pub use robust_covariance::{robust_covariance, RobustCovariance};
