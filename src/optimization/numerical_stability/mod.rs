//! numerical_stability — numerically robust logistic transforms.
//!
//! Purpose
//! -------
//! Collect the scalar transforms that logistic regression needs in a form
//! that never overflows: the logistic (sigmoid) function and probability
//! clamping for log-loss evaluation. Centralizing them here
//! lets the kernel and the optimizer share one set of cutoffs.
//!
//! Key behaviors
//! -------------
//! - `safe_logistic`: sign-split logistic function, exact at zero.
//! - `clamp_probability`: map a probability into `[eps, 1 - eps]`.
//! - `PROB_EPS`: default clamp width used by the cost function.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite `f64`; validation happens in the logistic layer.
//! - `clamp_probability` assumes `0 < eps < 0.5`.
//!
//! Conventions
//! -----------
//! - Pure functions, no allocation, no logging.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] check the symmetry of the logistic
//!   function, exact values at zero, tails at ±800, and clamping.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{PROB_EPS, clamp_probability, safe_logistic};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::transformations::{PROB_EPS, clamp_probability, safe_logistic};
}
