//! models — user-facing logistic-regression models.
//!
//! [`LogitModel`] composes the core kernel with either batch gradient descent
//! or the L-BFGS optimizer and adds prediction and evaluation on top.

pub mod logit;

pub use self::logit::{FitSummary, LogitModel};
