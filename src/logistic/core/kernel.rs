//! kernel — sigmoid activation and the regularized logistic cost/gradient.
//!
//! Purpose
//! -------
//! Evaluate the binary cross-entropy of a logistic model with an L2 (ridge)
//! penalty on every weight except the bias, together with its gradient, in a
//! single pass over the data. This is the only place the objective is
//! written down; gradient descent, L-BFGS and the Python bindings all call it.
//!
//! Key behaviors
//! -------------
//! - [`sigmoid`] maps any `ndarray` element-wise through the numerically
//!   stable logistic; [`sigmoid_scalar`] is the scalar form.
//! - [`compute_cost_and_gradient`] validates its inputs and returns a
//!   [`CostGradient`] with
//!   `J(θ) = −(1/m)·Σ[y·ln h + (1−y)·ln(1−h)] + λ/(2m)·Σ_{j≥1} θ_j²` and
//!   `∇J(θ) = Xᵀ(h − y)/m + (λ/m)·[0, θ₁, …, θ_{n−1}]`, where `h = σ(Xθ)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `rows(X) == len(y)` and `len(θ) == cols(X)`; `λ` is finite and `>= 0`.
//! - The returned gradient always has `len(θ)` entries.
//! - Under the default clamp policy the cost is finite and `>= 0`.
//!
//! Conventions
//! -----------
//! - Column 0 of `X` is the bias column; `θ₀` is excluded from the penalty and
//!   from the penalty term of the gradient.
//! - Inputs are never mutated; outputs are freshly allocated.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the worked examples at `θ = 0`, regularization
//!   monotonicity, bias exclusion, both stability policies, and agreement of
//!   the analytic gradient with central differences.
use crate::{
    logistic::{
        core::{
            data::{DesignMatrix, LabelVector},
            options::StabilityPolicy,
            validation::{validate_lambda, validate_rows, validate_theta},
        },
        errors::{LogitError, LogitResult},
    },
    optimization::numerical_stability::{clamp_probability, safe_logistic},
};
use ndarray::{Array, Array1, ArrayBase, ArrayView1, ArrayView2, Data, Dimension, Zip, s};

/// Element-wise logistic `σ(z) = 1 / (1 + e^{−z})` for any array shape.
///
/// Evaluated in the split form of [`safe_logistic`], so no intermediate
/// overflows. `σ(0) == 0.5` exactly; for `|z|` beyond ~37 (negative side
/// ~745) the `f64` result rounds to exactly `1.0` (`0.0`).
pub fn sigmoid<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(safe_logistic)
}

/// Scalar logistic, same numerics as [`sigmoid`].
pub fn sigmoid_scalar(z: f64) -> f64 {
    safe_logistic(z)
}

/// Output of [`compute_cost_and_gradient`].
///
/// - `cost`: `data_cost + penalty`.
/// - `data_cost`: mean binary cross-entropy.
/// - `penalty`: `λ/(2m)·Σ_{j≥1} θ_j²`.
/// - `grad`: `∇J(θ)`, length `len(θ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGradient {
    pub cost: f64,
    pub data_cost: f64,
    pub penalty: f64,
    pub grad: Array1<f64>,
}

/// Regularized logistic cost and gradient at `theta`.
///
/// # Errors
/// - [`LogitError::ShapeMismatch`] when `len(y) != rows(X)` (`what = "labels"`)
///   or `len(θ) != cols(X)` (`what = "theta"`).
/// - [`LogitError::NonFiniteTheta`] for NaN/±inf parameters.
/// - [`LogitError::InvalidRegularization`] for `λ < 0` or non-finite `λ`.
/// - [`LogitError::InvalidClampEpsilon`] for a malformed clamp policy.
/// - [`LogitError::NumericInstability`] under [`StabilityPolicy::Surface`]
///   when some activation is exactly 0 or 1.
///
/// # Example
/// ```
/// use ndarray::array;
/// use rust_logreg::logistic::core::{
///     data::{DesignMatrix, LabelVector},
///     kernel::compute_cost_and_gradient,
///     options::StabilityPolicy,
/// };
///
/// let x = DesignMatrix::new(array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]])?;
/// let y = LabelVector::new(array![0.0, 1.0])?;
/// let out = compute_cost_and_gradient(
///     array![0.0, 0.0, 0.0].view(), &x, &y, 1.0, StabilityPolicy::default(),
/// )?;
/// assert!((out.cost - std::f64::consts::LN_2).abs() < 1e-12);
/// # Ok::<(), rust_logreg::logistic::errors::LogitError>(())
/// ```
pub fn compute_cost_and_gradient(
    theta: ArrayView1<f64>, x: &DesignMatrix, y: &LabelVector, lambda: f64,
    policy: StabilityPolicy,
) -> LogitResult<CostGradient> {
    validate_rows("labels", x.nrows(), y.len())?;
    validate_theta(theta, x.ncols())?;
    validate_lambda(lambda)?;
    policy.validate()?;
    cost_and_gradient_unchecked(theta, x.view(), y.view(), lambda, policy)
}

/// Kernel body without precondition checks.
///
/// Callers must have validated shapes, `λ` and the policy; the only error
/// left is a saturated activation under [`StabilityPolicy::Surface`].
pub(crate) fn cost_and_gradient_unchecked(
    theta: ArrayView1<f64>, x: ArrayView2<f64>, y: ArrayView1<f64>, lambda: f64,
    policy: StabilityPolicy,
) -> LogitResult<CostGradient> {
    let m = x.nrows() as f64;
    let h = sigmoid(&x.dot(&theta));

    let mut log_lik = 0.0;
    for (index, (&h_i, &y_i)) in h.iter().zip(y.iter()).enumerate() {
        let p = match policy {
            StabilityPolicy::Clamp { eps } => clamp_probability(h_i, eps),
            StabilityPolicy::Surface => {
                if h_i <= 0.0 || h_i >= 1.0 {
                    return Err(LogitError::NumericInstability { index, activation: h_i });
                }
                h_i
            }
        };
        log_lik += y_i * p.ln() + (1.0 - y_i) * (1.0 - p).ln();
    }
    let data_cost = -log_lik / m;

    let weights = theta.slice(s![1..]);
    let penalty = lambda / (2.0 * m) * weights.dot(&weights);

    let residual = &h - &y;
    let mut grad = x.t().dot(&residual) / m;
    Zip::from(grad.slice_mut(s![1..])).and(&weights).for_each(|g, &w| *g += lambda / m * w);

    let cost = data_cost + penalty;
    log::trace!("cost_and_gradient: J = {cost:.6} (data {data_cost:.6}, penalty {penalty:.6})");
    Ok(CostGradient { cost, data_cost, penalty, grad })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::LN_2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `sigmoid` values and shape preservation.
    // - The cost/gradient worked examples at θ = 0.
    // - Regularization monotonicity and bias exclusion.
    // - Both stability policies on saturated activations.
    // - Analytic gradient vs central finite differences.
    //
    // They intentionally DO NOT cover:
    // - Iterative fitting; see `descent` and `models::logit`.
    // -------------------------------------------------------------------------

    fn two_example_fixture() -> (DesignMatrix, LabelVector) {
        let x = DesignMatrix::new(array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]).expect("valid design");
        let y = LabelVector::new(array![0.0, 1.0]).expect("valid labels");
        (x, y)
    }

    #[test]
    // Purpose
    // -------
    // σ(0) is exactly one half, the output keeps the input shape, and large
    // arguments do not overflow.
    //
    // Given
    // -----
    // - `z = [[0, 800], [-800, 2]]`.
    //
    // Expect
    // ------
    // - `[[0.5, 1.0], [0.0, σ(2)]]`, all finite.
    fn sigmoid_is_exact_at_zero_and_saturates_without_overflow() {
        let z = array![[0.0, 800.0], [-800.0, 2.0]];

        let h = sigmoid(&z);

        assert_eq!(h.dim(), (2, 2));
        assert_eq!(h[[0, 0]], 0.5);
        assert_eq!(h[[0, 1]], 1.0);
        assert_eq!(h[[1, 0]], 0.0);
        assert!((h[[1, 1]] - 1.0 / (1.0 + (-2.0f64).exp())).abs() < 1e-15);
        assert_eq!(sigmoid_scalar(0.0), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Worked example: at θ = 0 every activation is 0.5, so J = ln 2 and the
    // penalty vanishes whatever λ is.
    //
    // Given
    // -----
    // - X = [[1,2,3],[1,4,5]], y = [0,1], θ = [0,0,0], λ ∈ {0, 1}.
    //
    // Expect
    // ------
    // - cost ≈ 0.693147 for both λ, penalty = 0.
    // - grad = Xᵀ(h − y)/m = [0, −0.5, −0.5].
    fn cost_at_zero_theta_is_ln_two() {
        let (x, y) = two_example_fixture();
        let theta = array![0.0, 0.0, 0.0];

        for lambda in [0.0, 1.0] {
            let out = compute_cost_and_gradient(theta.view(), &x, &y, lambda, StabilityPolicy::default())
                .expect("kernel should evaluate");

            assert!((out.cost - LN_2).abs() < 1e-12, "lambda = {lambda}: {}", out.cost);
            assert!((out.cost - 0.693147).abs() < 1e-6);
            assert_eq!(out.penalty, 0.0);
            assert_eq!(out.grad.len(), 3);
            assert_abs_diff_eq!(out.grad[0], 0.0, epsilon = 1e-15);
            assert_abs_diff_eq!(out.grad[1], -0.5, epsilon = 1e-15);
            assert_abs_diff_eq!(out.grad[2], -0.5, epsilon = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // The penalty grows with λ, ignores θ₀, and only touches gradient
    // entries j ≥ 1.
    //
    // Given
    // -----
    // - Fixture data, θ = [5, 0.3, −0.2], λ ∈ {0, 0.5, 2}.
    // - θ' = [−7, 0.3, −0.2] (only the bias differs).
    //
    // Expect
    // ------
    // - Cost strictly increasing in λ with identical data cost.
    // - penalty = λ/(2m)·(0.3² + 0.2²), unchanged when only θ₀ changes.
    // - grad(λ) − grad(0) = (λ/m)·[0, 0.3, −0.2].
    fn regularization_is_monotone_and_skips_bias() {
        let (x, y) = two_example_fixture();
        let theta = array![5.0, 0.3, -0.2];
        let policy = StabilityPolicy::default();

        let base = compute_cost_and_gradient(theta.view(), &x, &y, 0.0, policy).expect("λ = 0");
        let mid = compute_cost_and_gradient(theta.view(), &x, &y, 0.5, policy).expect("λ = 0.5");
        let high = compute_cost_and_gradient(theta.view(), &x, &y, 2.0, policy).expect("λ = 2");

        assert!(base.cost < mid.cost && mid.cost < high.cost);
        assert_eq!(base.data_cost, high.data_cost);
        let expected_penalty = 2.0 / (2.0 * 2.0) * (0.09 + 0.04);
        assert!((high.penalty - expected_penalty).abs() < 1e-15);

        let diff = &high.grad - &base.grad;
        assert_eq!(diff[0], 0.0);
        assert!((diff[1] - 2.0 / 2.0 * 0.3).abs() < 1e-12);
        assert!((diff[2] + 2.0 / 2.0 * 0.2).abs() < 1e-12);

        let moved_bias = array![-7.0, 0.3, -0.2];
        let other =
            compute_cost_and_gradient(moved_bias.view(), &x, &y, 2.0, policy).expect("λ = 2");
        assert_eq!(other.penalty, high.penalty);
    }

    #[test]
    // Purpose
    // -------
    // A saturated activation keeps the cost finite under `Clamp` and is
    // reported under `Surface`.
    //
    // Given
    // -----
    // - X = [[1, 100]], y = [0], θ = [0, 10] so σ(1000) == 1.0.
    //
    // Expect
    // ------
    // - Clamp: cost ≈ −ln(eps), finite and positive; gradient = [1, 100].
    // - Surface: `NumericInstability { index: 0, activation: 1.0 }`.
    fn saturated_activation_respects_policy() {
        let x = DesignMatrix::new(array![[1.0, 100.0]]).expect("valid design");
        let y = LabelVector::new(array![0.0]).expect("valid labels");
        let theta = array![0.0, 10.0];

        let clamped = compute_cost_and_gradient(theta.view(), &x, &y, 0.0, StabilityPolicy::default())
            .expect("clamped cost should evaluate");
        assert!(clamped.cost.is_finite() && clamped.cost > 30.0);
        assert_eq!(clamped.grad, array![1.0, 100.0]);

        let err = compute_cost_and_gradient(theta.view(), &x, &y, 0.0, StabilityPolicy::Surface)
            .unwrap_err();
        assert_eq!(err, LogitError::NumericInstability { index: 0, activation: 1.0 });
    }

    #[test]
    // Purpose
    // -------
    // Shape and option errors are raised before any arithmetic.
    //
    // Given
    // -----
    // - Fixture data with θ of length 2, and a valid θ with λ = −1.
    //
    // Expect
    // ------
    // - `ShapeMismatch { what: "theta", expected: 3, found: 2 }`.
    // - `InvalidRegularization { value: −1 }`.
    fn kernel_rejects_bad_shapes_and_lambda() {
        let (x, y) = two_example_fixture();
        let policy = StabilityPolicy::default();

        assert_eq!(
            compute_cost_and_gradient(array![0.0, 0.0].view(), &x, &y, 0.0, policy).unwrap_err(),
            LogitError::ShapeMismatch { what: "theta", expected: 3, found: 2 }
        );
        assert_eq!(
            compute_cost_and_gradient(array![0.0, 0.0, 0.0].view(), &x, &y, -1.0, policy)
                .unwrap_err(),
            LogitError::InvalidRegularization { value: -1.0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // The analytic gradient agrees with central differences of the cost.
    //
    // Given
    // -----
    // - Four examples with a bias column, θ = [0.1, −0.4, 0.25], λ = 0.7.
    //
    // Expect
    // ------
    // - |∇J − FD| < 1e-6 componentwise (step 1e-6).
    fn analytic_gradient_matches_finite_differences() {
        let x = DesignMatrix::with_bias(array![[0.5, 1.0], [-1.5, 2.0], [2.0, -0.5], [0.0, 0.3]].view())
            .expect("valid design");
        let y = LabelVector::new(array![1.0, 0.0, 1.0, 0.0]).expect("valid labels");
        let theta = array![0.1, -0.4, 0.25];
        let lambda = 0.7;
        let policy = StabilityPolicy::default();
        let cost_at = |t: &Array1<f64>| {
            compute_cost_and_gradient(t.view(), &x, &y, lambda, policy).expect("cost").cost
        };

        let analytic = compute_cost_and_gradient(theta.view(), &x, &y, lambda, policy)
            .expect("kernel should evaluate")
            .grad;

        let step = 1e-6;
        for j in 0..theta.len() {
            let mut up = theta.clone();
            let mut down = theta.clone();
            up[j] += step;
            down[j] -= step;
            let fd = (cost_at(&up) - cost_at(&down)) / (2.0 * step);
            assert!((analytic[j] - fd).abs() < 1e-6, "j = {j}: {} vs {fd}", analytic[j]);
        }
    }
}
