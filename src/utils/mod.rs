//! Shared numeric helpers.

pub mod linalg;

pub use linalg::{augment_with_constant, gram, invert_gram, weighted_gram};
