//! logistic — regularized binary logistic regression.
//!
//! Purpose
//! -------
//! Implement the L2-regularized logistic-regression objective, its
//! gradient-descent optimizer, and a model façade that fits by gradient
//! descent or L-BFGS and predicts labels.
//!
//! Key behaviors
//! -------------
//! - `core`: validated data, the cost/gradient kernel, gradient descent,
//!   options and metrics.
//! - `models`: [`LogitModel`](models::LogitModel), implementing the
//!   optimizer's `LogLikelihood` trait.
//! - `errors`: [`LogitError`](errors::LogitError) and
//!   [`LogitResult`](errors::LogitResult).
//!
//! Downstream usage
//! ----------------
//! - Rust callers typically `use rust_logreg::logistic::prelude::*;`.
//! - The Python bindings in `lib.rs` wrap the same entry points.

pub mod core;
pub mod errors;
pub mod models;

pub mod prelude {
    pub use super::core::{
        ConfusionCounts, CostGradient, DescentOutcome, DesignMatrix, GDOptions, LabelVector,
        LogitData, LogitOptions, Solver, StabilityPolicy, UpdateRule, compute_cost_and_gradient,
        gradient_descent, sigmoid, sigmoid_scalar,
    };
    pub use super::errors::{LogitError, LogitResult};
    pub use super::models::{FitSummary, LogitModel};
}
