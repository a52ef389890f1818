//! Numerical stability utilities.
//!
//! Provides safe implementations of the logistic function and the
//! transforms around it that are prone to overflow/underflow in naïve form.
//!
//! # Provided items
//! - [`PROB_EPS`]: default clamp width (1e-15) for probabilities fed into
//!   a logarithm.
//! - [`safe_logistic(x)`]: `1 / (1 + exp(-x))` evaluated without overflow.
//! - [`clamp_probability(p, eps)`]: clamp into `[eps, 1 - eps]`.

/// Default probability clamp used before taking logarithms in the log-loss.
///
/// Matches the conventional log-loss epsilon; `ln(1e-15) ≈ -34.5` keeps the
/// per-example loss finite while barely moving well-conditioned values.
pub const PROB_EPS: f64 = 1e-15;

/// Numerically stable logistic function `σ(x) = 1 / (1 + exp(-x))`.
///
/// Splits on the sign of `x` so the exponential is always of a non-positive
/// argument:
///
/// - `x ≥ 0`: `1 / (1 + exp(-x))`
/// - `x < 0`: `exp(x) / (1 + exp(x))`
///
/// `safe_logistic(0.0)` is exactly `0.5`. For `|x|` beyond roughly 37 the
/// result rounds to exactly `1.0` (or underflows towards `0.0` past ~745);
/// callers that take logarithms must clamp with [`clamp_probability`].
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Clamp a probability into `[eps, 1 - eps]`.
pub fn clamp_probability(p: f64, eps: f64) -> f64 {
    p.clamp(eps, 1.0 - eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact and limiting values of `safe_logistic`.
    // - `clamp_probability` at both boundaries.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The logistic function must return exactly one half at zero.
    //
    // Given
    // -----
    // - `x = 0.0` and `x = -0.0`.
    //
    // Expect
    // ------
    // - Both evaluate to exactly `0.5`.
    fn safe_logistic_is_exactly_half_at_zero() {
        assert_eq!(safe_logistic(0.0), 0.5);
        assert_eq!(safe_logistic(-0.0), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Check the symmetry σ(-x) = 1 - σ(x) and that no branch overflows.
    //
    // Given
    // -----
    // - A grid of moderate inputs and the extreme values ±800.
    //
    // Expect
    // ------
    // - Symmetry holds to 1e-12 on the grid.
    // - Tails are finite and inside [0, 1].
    fn safe_logistic_is_symmetric_and_finite_in_tails() {
        for &x in &[-10.0, -3.5, -1.0, -0.25, 0.25, 1.0, 3.5, 10.0] {
            let lhs = safe_logistic(-x);
            let rhs = 1.0 - safe_logistic(x);
            assert!((lhs - rhs).abs() < 1e-12, "symmetry failed at {x}: {lhs} vs {rhs}");
        }
        let hi = safe_logistic(800.0);
        let lo = safe_logistic(-800.0);
        assert!(hi.is_finite() && lo.is_finite());
        assert!((0.0..=1.0).contains(&hi));
        assert!((0.0..=1.0).contains(&lo));
    }

    #[test]
    // Purpose
    // -------
    // Clamp both saturated probabilities into the open unit interval.
    //
    // Given
    // -----
    // - `p = 0.0`, `p = 1.0`, `p = 0.3` with `eps = PROB_EPS`.
    //
    // Expect
    // ------
    // - Saturated values move to the boundaries; interior values are untouched.
    fn clamp_probability_moves_only_saturated_values() {
        assert_eq!(clamp_probability(0.0, PROB_EPS), PROB_EPS);
        assert_eq!(clamp_probability(1.0, PROB_EPS), 1.0 - PROB_EPS);
        assert_eq!(clamp_probability(0.3, PROB_EPS), 0.3);
    }
}
