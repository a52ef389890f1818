//! Logistic validation helpers — reusable checks for inputs, parameters and options.
//!
//! Purpose
//! -------
//! Centralize the precondition checks shared by the kernel, gradient descent,
//! the data containers and the model façade, so every entry point fails fast
//! with the same structured [`LogitError`] for the same mistake.
//!
//! Key behaviors
//! -------------
//! - Validate design matrices (non-empty, finite) and label vectors
//!   (non-empty, finite, binary).
//! - Validate the shape relationships `rows(X) == len(y)` and
//!   `len(θ) == cols(X)`, plus finiteness of `θ`.
//! - Validate scalar options: regularization strength, learning rate, cost
//!   tolerance, classification threshold and log-clamp epsilon.
//!
//! Conventions
//! -----------
//! - Indices in errors are 0-based and point at the **first** offending
//!   element.
//! - Helpers take views and never allocate; they contain no I/O or logging.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each helper on a valid input and on its boundary
//!   failures (zero, negative, NaN, off-by-one lengths).
use crate::logistic::errors::{LogitError, LogitResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate a design matrix: at least one row and one column, all entries finite.
///
/// # Errors
/// - [`LogitError::EmptyDesign`] when `rows == 0` or `cols == 0`.
/// - [`LogitError::NonFiniteDesign`] for the first NaN/±inf entry (row-major order).
pub fn validate_design(x: ArrayView2<f64>) -> LogitResult<()> {
    let (rows, cols) = x.dim();
    if rows == 0 || cols == 0 {
        return Err(LogitError::EmptyDesign { rows, cols });
    }
    for ((row, col), &value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(LogitError::NonFiniteDesign { row, col, value });
        }
    }
    Ok(())
}

/// Validate a label vector: non-empty, finite, every entry exactly 0 or 1.
///
/// # Errors
/// - [`LogitError::EmptyLabels`], [`LogitError::NonFiniteLabel`],
///   [`LogitError::InvalidLabel`].
pub fn validate_labels(y: ArrayView1<f64>) -> LogitResult<()> {
    if y.is_empty() {
        return Err(LogitError::EmptyLabels);
    }
    for (index, &value) in y.iter().enumerate() {
        if !value.is_finite() {
            return Err(LogitError::NonFiniteLabel { index, value });
        }
        if value != 0.0 && value != 1.0 {
            return Err(LogitError::InvalidLabel { index, value });
        }
    }
    Ok(())
}

/// Check that a row count matches the number of examples `m`.
pub fn validate_rows(what: &'static str, expected: usize, found: usize) -> LogitResult<()> {
    if expected != found {
        return Err(LogitError::ShapeMismatch { what, expected, found });
    }
    Ok(())
}

/// Validate a parameter vector against the number of design columns `n`.
///
/// # Errors
/// - [`LogitError::ShapeMismatch`] with `what = "theta"` when `len(θ) != n`.
/// - [`LogitError::NonFiniteTheta`] for the first NaN/±inf entry.
pub fn validate_theta(theta: ArrayView1<f64>, n: usize) -> LogitResult<()> {
    validate_rows("theta", n, theta.len())?;
    validate_theta_finite(theta)
}

/// Finiteness-only check for `θ`; used after each descent update.
pub fn validate_theta_finite(theta: ArrayView1<f64>) -> LogitResult<()> {
    match theta.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(LogitError::NonFiniteTheta { index, value: theta[index] }),
        None => Ok(()),
    }
}

/// Regularization strength must be finite and `>= 0`.
pub fn validate_lambda(lambda: f64) -> LogitResult<()> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(LogitError::InvalidRegularization { value: lambda });
    }
    Ok(())
}

/// Learning rate must be finite and strictly positive.
pub fn validate_learning_rate(value: f64) -> LogitResult<()> {
    if !value.is_finite() {
        return Err(LogitError::InvalidLearningRate { value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(LogitError::InvalidLearningRate { value, reason: "must be > 0" });
    }
    Ok(())
}

/// Optional cost-change tolerance must be finite and strictly positive.
pub fn validate_tol_cost(tol_cost: Option<f64>) -> LogitResult<()> {
    if let Some(value) = tol_cost {
        if !value.is_finite() {
            return Err(LogitError::InvalidTolerance { value, reason: "must be finite" });
        }
        if value <= 0.0 {
            return Err(LogitError::InvalidTolerance { value, reason: "must be > 0" });
        }
    }
    Ok(())
}

/// Classification threshold must lie in the open interval (0, 1).
pub fn validate_threshold(value: f64) -> LogitResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(LogitError::InvalidThreshold { value });
    }
    Ok(())
}

/// Log clamp must satisfy `0 < eps < 0.5` so that `[eps, 1 - eps]` is non-empty.
pub fn validate_clamp_eps(value: f64) -> LogitResult<()> {
    if !(value > 0.0 && value < 0.5) {
        return Err(LogitError::InvalidClampEpsilon { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Design and label validation (emptiness, finiteness, binary labels).
    // - Shape and finiteness checks for θ.
    // - Scalar option bounds.
    //
    // They intentionally DO NOT cover:
    // - How callers combine these helpers; see `data`, `kernel` and `descent`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Empty and non-finite designs are rejected with precise locations.
    //
    // Given
    // -----
    // - A 0×3 matrix and a 2×2 matrix with NaN at (1, 0).
    //
    // Expect
    // ------
    // - `EmptyDesign { rows: 0, cols: 3 }` and `NonFiniteDesign { row: 1, col: 0, .. }`.
    fn validate_design_rejects_empty_and_non_finite() {
        let empty = Array2::<f64>::zeros((0, 3));
        assert_eq!(validate_design(empty.view()), Err(LogitError::EmptyDesign { rows: 0, cols: 3 }));

        let bad = array![[1.0, 2.0], [f64::NAN, 4.0]];
        match validate_design(bad.view()) {
            Err(LogitError::NonFiniteDesign { row, col, value }) => {
                assert_eq!((row, col), (1, 0));
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteDesign, got {other:?}"),
        }

        assert!(validate_design(array![[1.0, 2.0, 3.0]].view()).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Labels must be binary; anything else points at the first bad index.
    //
    // Given
    // -----
    // - `[]`, `[0, 1, 0.5]`, `[1, inf]`, `[0, 1, 1]`.
    //
    // Expect
    // ------
    // - `EmptyLabels`, `InvalidLabel { index: 2 }`, `NonFiniteLabel { index: 1 }`, `Ok`.
    fn validate_labels_enforces_binary_values() {
        assert_eq!(validate_labels(Array1::<f64>::zeros(0).view()), Err(LogitError::EmptyLabels));
        assert_eq!(
            validate_labels(array![0.0, 1.0, 0.5].view()),
            Err(LogitError::InvalidLabel { index: 2, value: 0.5 })
        );
        assert_eq!(
            validate_labels(array![1.0, f64::INFINITY].view()),
            Err(LogitError::NonFiniteLabel { index: 1, value: f64::INFINITY })
        );
        assert!(validate_labels(array![0.0, 1.0, 1.0].view()).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // θ must match the column count and be finite.
    //
    // Given
    // -----
    // - n = 3 with θ of length 2, and θ = [0, -inf, 1].
    //
    // Expect
    // ------
    // - `ShapeMismatch { what: "theta", expected: 3, found: 2 }`.
    // - `NonFiniteTheta { index: 1, .. }`.
    fn validate_theta_checks_length_then_finiteness() {
        assert_eq!(
            validate_theta(array![0.0, 0.0].view(), 3),
            Err(LogitError::ShapeMismatch { what: "theta", expected: 3, found: 2 })
        );
        assert_eq!(
            validate_theta(array![0.0, f64::NEG_INFINITY, 1.0].view(), 3),
            Err(LogitError::NonFiniteTheta { index: 1, value: f64::NEG_INFINITY })
        );
    }

    #[test]
    // Purpose
    // -------
    // Scalar options respect their documented bounds.
    //
    // Given
    // -----
    // - Boundary values for λ, α, tol_cost, threshold and clamp epsilon.
    //
    // Expect
    // ------
    // - λ = 0 accepted, λ < 0 and NaN rejected.
    // - α = 0 rejected; tol_cost = None accepted, Some(0) rejected.
    // - threshold 0 and 1 rejected, 0.5 accepted; eps 0.5 rejected.
    fn scalar_options_respect_bounds() {
        assert!(validate_lambda(0.0).is_ok());
        assert!(validate_lambda(-1e-12).is_err());
        assert!(validate_lambda(f64::NAN).is_err());

        assert!(matches!(
            validate_learning_rate(0.0),
            Err(LogitError::InvalidLearningRate { reason: "must be > 0", .. })
        ));
        assert!(validate_learning_rate(0.01).is_ok());

        assert!(validate_tol_cost(None).is_ok());
        assert!(validate_tol_cost(Some(0.0)).is_err());

        assert!(validate_threshold(0.0).is_err());
        assert!(validate_threshold(1.0).is_err());
        assert!(validate_threshold(0.5).is_ok());

        assert!(validate_clamp_eps(1e-15).is_ok());
        assert!(validate_clamp_eps(0.5).is_err());
    }
}
