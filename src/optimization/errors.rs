use argmin::core::{ArgminError, Error};
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::logistic::errors::LogitError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- MLEOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Logistic model errors ----
    /// theta, X and y disagree on m or n.
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// Regularization strength must be finite and >= 0.
    InvalidRegularization {
        value: f64,
    },
    /// Parameter vector handed to the model contains NaN/±inf.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },
    /// An activation saturated to exactly 0 or 1.
    NumericInstability {
        index: usize,
        activation: f64,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- MLEOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Logistic model errors ----
            OptError::ShapeMismatch { what, expected, found } => {
                write!(f, "Shape mismatch for {what}: expected {expected}, found {found}")
            }
            OptError::InvalidRegularization { value } => {
                write!(f, "Invalid regularization strength {value}, must be finite and >= 0")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            OptError::NumericInstability { index, activation } => {
                write!(f, "Activation at example {index} saturated to {activation}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Errors raised by our own adapter travel through argmin boxed; unwrap them first.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

/// Convert an [`OptError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<LogitError> for OptError {
    fn from(err: LogitError) -> Self {
        match err {
            LogitError::ShapeMismatch { what, expected, found } => {
                OptError::ShapeMismatch { what, expected, found }
            }
            LogitError::InvalidRegularization { value } => {
                OptError::InvalidRegularization { value }
            }
            LogitError::NonFiniteTheta { index, value } => {
                OptError::InvalidThetaInput { index, value }
            }
            LogitError::NumericInstability { index, activation } => {
                OptError::NumericInstability { index, activation }
            }
            other => OptError::BackendError { text: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Conversions from logistic-model errors into `OptError`, including
    //   model errors without a dedicated variant.
    // - Recovery of an `OptError` that was boxed into an argmin `Error`.
    //
    // They intentionally DO NOT cover:
    // - Every `Display` message; those are plain `write!` calls.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure shape errors keep their payload across the model → optimizer
    // boundary.
    //
    // Given
    // -----
    // - `LogitError::ShapeMismatch` for theta with expected 3, found 2.
    //
    // Expect
    // ------
    // - `OptError::ShapeMismatch` with identical fields.
    fn from_logit_error_preserves_shape_mismatch() {
        let err = LogitError::ShapeMismatch { what: "theta", expected: 3, found: 2 };

        let converted = OptError::from(err);

        assert_eq!(converted, OptError::ShapeMismatch { what: "theta", expected: 3, found: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Model errors without an optimizer counterpart keep their message.
    //
    // Given
    // -----
    // - `LogitError::InvalidClampEpsilon { value: 0.7 }`.
    //
    // Expect
    // ------
    // - `OptError::BackendError` whose text is the model error's message.
    fn from_logit_error_keeps_message_of_unmapped_variant() {
        let err = LogitError::InvalidClampEpsilon { value: 0.7 };
        let message = err.to_string();

        let converted = OptError::from(err);

        assert_eq!(converted, OptError::BackendError { text: message });
    }

    #[test]
    // Purpose
    // -------
    // Verify that an `OptError` boxed into argmin's `Error` (as the adapter
    // does for non-finite costs) comes back out unchanged.
    //
    // Given
    // -----
    // - `OptError::NonFiniteCost { value: +∞ }` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::from` returns the original variant, not `BackendError`.
    fn from_argmin_error_recovers_boxed_opt_error() {
        let boxed: Error = OptError::NonFiniteCost { value: f64::INFINITY }.into();

        let recovered = OptError::from(boxed);

        assert_eq!(recovered, OptError::NonFiniteCost { value: f64::INFINITY });
    }
}
