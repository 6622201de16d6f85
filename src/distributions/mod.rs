//! Reference probability distributions tabulated on a fixed grid.

mod normal_reference;

pub use normal_reference::{DistributionCurves, GridError, NormalReference};
