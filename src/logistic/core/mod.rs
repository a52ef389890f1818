//! core — logistic-regression data, kernel, descent, options and metrics.
//!
//! Purpose
//! -------
//! Collect the building blocks of regularized binary logistic regression:
//! validated data containers, the cost-and-gradient kernel, batch gradient
//! descent, configuration types, and evaluation metrics. The model façade in
//! `logistic::models` composes these pieces.
//!
//! Key behaviors
//! -------------
//! - [`DesignMatrix`], [`LabelVector`] and [`LogitData`] enforce shape and
//!   value invariants once, at construction.
//! - [`compute_cost_and_gradient`] is the single definition of the
//!   regularized cross-entropy and its gradient; [`sigmoid`] is its
//!   activation.
//! - [`gradient_descent`] iterates the kernel and records a cost history.
//! - [`GDOptions`], [`UpdateRule`], [`StabilityPolicy`], [`LogitOptions`] and
//!   [`Solver`] carry configuration with validated constructors.
//! - [`ConfusionCounts`] summarizes predictions against labels.
//!
//! Invariants & assumptions
//! ------------------------
//! - For every operation `rows(X) == len(y) == m` and `len(θ) == cols(X) == n`.
//! - Column 0 of `X` is the bias; `θ₀` is never regularized.
//! - Nothing here allocates persistent state, performs I/O, or depends on
//!   evaluation order beyond the sequential descent loop.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. Labels are `f64` values in `{0.0, 1.0}` so they
//!   combine directly with `ndarray` arithmetic.
//! - Errors are reported as [`LogitError`](crate::logistic::errors::LogitError);
//!   nothing in this module panics on invalid input.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; end-to-end fitting is covered
//!   by `tests/integration_logit_pipeline.rs`.

pub mod data;
pub mod descent;
pub mod kernel;
pub mod metrics;
pub mod options;
pub mod validation;

pub use self::data::{DesignMatrix, LabelVector, LogitData};
pub use self::descent::{DescentOutcome, gradient_descent};
pub use self::kernel::{CostGradient, compute_cost_and_gradient, sigmoid, sigmoid_scalar};
pub use self::metrics::ConfusionCounts;
pub use self::options::{
    DEFAULT_ITERATIONS, DEFAULT_LAMBDA, DEFAULT_LEARNING_RATE, GDOptions, LogitOptions, Solver,
    StabilityPolicy, UpdateRule,
};
