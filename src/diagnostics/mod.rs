//! Multicollinearity diagnostics reported alongside a fit.
//!
//! - **Correlation**: pairwise Pearson correlation of the regressors
//! - **Condition Number**: conditioning of the augmented design matrix
//!
//! ```rust,ignore
//! use robust_ols::diagnostics::{condition_diagnostic, correlation_matrix};
//!
//! let corr = correlation_matrix(&x, &names);
//! let cond = condition_diagnostic(&design);
//! println!("{}\nκ = {:.1} ({})", corr, cond.condition_number, cond.severity.description());
//! ```

mod condition_number;
mod correlation;

pub use condition_number::{
    classify_condition_number, condition_diagnostic, condition_number, ConditionDiagnostic,
    ConditionSeverity,
};
pub use correlation::{correlation_matrix, CorrelationMatrix};
