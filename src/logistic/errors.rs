//! Errors for logistic-regression models (input validation, option checks,
//! numerical failures of the kernel, and optimizer failures).
//!
//! This module defines [`LogitError`], shared by the kernel, the
//! gradient-descent loop, the model façade and the Python bindings. It
//! implements `Display`/`Error` and, with the `python-bindings` feature,
//! converts to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - `what` in [`LogitError::ShapeMismatch`] names the offending operand
//!   (`"theta"`, `"labels"`, `"features"`, ...).
//! - Optimizer/backend errors are normalized to
//!   [`LogitError::OptimizationFailed`] with a human-readable message.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::optimization::errors::OptError;

/// Crate-wide result alias for logistic-regression operations.
pub type LogitResult<T> = Result<T, LogitError>;

/// Unified error type for logistic regression.
#[derive(Debug, Clone, PartialEq)]
pub enum LogitError {
    // ---- Shapes ----
    /// Two operands disagree on the number of examples or features.
    ShapeMismatch { what: &'static str, expected: usize, found: usize },

    // ---- Design matrix ----
    /// Design matrix has zero rows or zero columns.
    EmptyDesign { rows: usize, cols: usize },

    /// A design-matrix entry is NaN/±inf.
    NonFiniteDesign { row: usize, col: usize, value: f64 },

    // ---- Labels ----
    /// Label vector is empty.
    EmptyLabels,

    /// A label is NaN/±inf.
    NonFiniteLabel { index: usize, value: f64 },

    /// A label is neither 0 nor 1.
    InvalidLabel { index: usize, value: f64 },

    // ---- Options ----
    /// Regularization strength must be finite and >= 0.
    InvalidRegularization { value: f64 },

    /// Learning rate must be finite and > 0.
    InvalidLearningRate { value: f64, reason: &'static str },

    /// Early-stopping tolerance must be finite and > 0.
    InvalidTolerance { value: f64, reason: &'static str },

    /// Classification threshold must lie strictly inside (0, 1).
    InvalidThreshold { value: f64 },

    /// Log clamp must satisfy 0 < eps < 0.5.
    InvalidClampEpsilon { value: f64 },

    /// Unrecognized update-rule name.
    UnknownUpdateRule { name: String },

    /// The absolute-residual update has no ridge term, so a model with
    /// `lambda > 0` cannot fit its own objective with it.
    UpdateRuleIgnoresLambda { lambda: f64 },

    // ---- Parameters / numerics ----
    /// A parameter entry is NaN/±inf.
    NonFiniteTheta { index: usize, value: f64 },

    /// An activation rounded to exactly 0 or 1 under the `Surface` policy.
    NumericInstability { index: usize, activation: f64 },

    // ---- Estimation ----
    /// Prediction or evaluation requested before `fit`.
    ModelNotFitted,

    /// The L-BFGS optimizer failed.
    OptimizationFailed { text: String },
}

impl std::error::Error for LogitError {}

impl std::fmt::Display for LogitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shapes ----
            LogitError::ShapeMismatch { what, expected, found } => {
                write!(f, "Shape mismatch for {what}: expected {expected}, found {found}")
            }
            // ---- Design matrix ----
            LogitError::EmptyDesign { rows, cols } => {
                write!(f, "Design matrix must be non-empty; got shape ({rows}, {cols})")
            }
            LogitError::NonFiniteDesign { row, col, value } => {
                write!(f, "Design matrix entry ({row}, {col}) is not finite: {value}")
            }
            // ---- Labels ----
            LogitError::EmptyLabels => write!(f, "Label vector must be non-empty."),
            LogitError::NonFiniteLabel { index, value } => {
                write!(f, "Label at index {index} is not finite: {value}")
            }
            LogitError::InvalidLabel { index, value } => {
                write!(f, "Label at index {index} must be 0 or 1; got: {value}")
            }
            // ---- Options ----
            LogitError::InvalidRegularization { value } => {
                write!(f, "Regularization strength must be finite and >= 0; got: {value}")
            }
            LogitError::InvalidLearningRate { value, reason } => {
                write!(f, "Invalid learning rate {value}: {reason}")
            }
            LogitError::InvalidTolerance { value, reason } => {
                write!(f, "Invalid cost tolerance {value}: {reason}")
            }
            LogitError::InvalidThreshold { value } => {
                write!(f, "Classification threshold must lie in (0, 1); got: {value}")
            }
            LogitError::InvalidClampEpsilon { value } => {
                write!(f, "Clamp epsilon must satisfy 0 < eps < 0.5; got: {value}")
            }
            LogitError::UnknownUpdateRule { name } => {
                write!(
                    f,
                    "Unknown update rule '{name}'. Valid options are 'signed', 'absolute_residual' or 'regularized'."
                )
            }
            LogitError::UpdateRuleIgnoresLambda { lambda } => {
                write!(
                    f,
                    "The absolute-residual update ignores regularization; use lambda = 0 or another rule (got lambda = {lambda})"
                )
            }
            // ---- Parameters / numerics ----
            LogitError::NonFiniteTheta { index, value } => {
                write!(f, "Parameter at index {index} is not finite: {value}")
            }
            LogitError::NumericInstability { index, activation } => {
                write!(
                    f,
                    "Activation for example {index} saturated to {activation}; log-loss is undefined"
                )
            }
            // ---- Estimation ----
            LogitError::ModelNotFitted => write!(f, "Model hasn't been fitted yet."),
            LogitError::OptimizationFailed { text } => {
                write!(f, "Optimizer failed: {text}")
            }
        }
    }
}

/// Model errors raised inside the optimizer come back as their original
/// variant; everything else is reported as an optimizer failure.
impl From<OptError> for LogitError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::ShapeMismatch { what, expected, found } => {
                LogitError::ShapeMismatch { what, expected, found }
            }
            OptError::InvalidRegularization { value } => {
                LogitError::InvalidRegularization { value }
            }
            OptError::InvalidThetaInput { index, value } => {
                LogitError::NonFiniteTheta { index, value }
            }
            OptError::NumericInstability { index, activation } => {
                LogitError::NumericInstability { index, activation }
            }
            other => LogitError::OptimizationFailed { text: other.to_string() },
        }
    }
}

/// Convert a [`LogitError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<LogitError> for PyErr {
    fn from(err: LogitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Round-tripping model errors through the optimizer error surface.
    // - Normalization of backend failures into `OptimizationFailed`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A saturated activation raised inside `maximize` must reach the caller
    // as the same model error.
    //
    // Given
    // -----
    // - `LogitError::NumericInstability { index: 4, activation: 1.0 }`.
    //
    // Expect
    // ------
    // - LogitError → OptError → LogitError is the identity.
    fn numeric_instability_survives_optimizer_round_trip() {
        let original = LogitError::NumericInstability { index: 4, activation: 1.0 };

        let back = LogitError::from(OptError::from(original.clone()));

        assert_eq!(back, original);
    }

    #[test]
    // Purpose
    // -------
    // Solver-level failures become `OptimizationFailed` carrying the message.
    //
    // Given
    // -----
    // - `OptError::NonFiniteCost { value: NaN }`.
    //
    // Expect
    // ------
    // - `LogitError::OptimizationFailed` whose text mentions the cost.
    fn backend_failure_maps_to_optimization_failed() {
        let err = LogitError::from(OptError::NonFiniteCost { value: f64::NAN });

        match err {
            LogitError::OptimizationFailed { text } => assert!(text.contains("Non-finite cost")),
            other => panic!("expected OptimizationFailed, got {other:?}"),
        }
    }
}
