//! optimization — MLE stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer used to fit logistic-regression models
//! with a quasi-Newton solver. It combines an Argmin-backed log-likelihood
//! optimizer, numerically stable logistic transforms, and a single
//! error/result surface. Callers implement a log-likelihood, choose
//! tolerances, and obtain fitted parameters and diagnostics without touching
//! backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`), including configuration of line searches and
//!   stopping criteria.
//! - Supply shared numerical primitives (`numerical_stability`) for the
//!   logistic function, its logarithm, and probability clamping.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate in an unconstrained parameter space `θ` and assume
//!   that inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Model errors raised inside `value`/`grad` (shape mismatches, saturated
//!   activations) are converted into `OptError` and abort the run.
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize a log-likelihood `ℓ(θ)` by minimizing
//!   an internal cost `c(θ) = -ℓ(θ)`. For logistic regression the model
//!   reports `ℓ(θ) = -J(θ)`, so the internal cost is exactly the
//!   regularized cross-entropy `J(θ)`.
//! - Parameters and gradients are `ndarray` aliases (`Theta`, `Grad`).
//! - The solver itself never logs; progress output is opt-in through the
//!   `obs_slog` feature and `MLEOptions::verbose`.
//!
//! Downstream usage
//! ----------------
//! - `logistic::models::logit::LogitModel` implements `LogLikelihood` and
//!   calls `maximize` when configured with the L-BFGS solver.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - `loglik_optimizer`: solver wiring, tolerance handling, and an
//!   end-to-end maximization of a concave quadratic.
//! - `numerical_stability`: agreement with naïve formulas on safe grids and
//!   well-behaved tails.
//! - `errors`: conversions from model and backend errors into `OptError`.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
