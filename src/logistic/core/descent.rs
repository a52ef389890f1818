//! descent — batch gradient descent for regularized logistic regression.
//!
//! Runs a fixed number of full-batch updates of `θ`, recording the
//! regularized cost after every update. Each iteration depends on the
//! previous `θ`, so the loop is strictly sequential and, for identical
//! inputs, bit-for-bit reproducible.
//!
//! The step taken is selected by [`UpdateRule`]; the cost is always reported
//! through the kernel with `opts.lambda`, whichever rule is active.
use crate::logistic::{
    core::{
        data::{DesignMatrix, LabelVector},
        kernel::{cost_and_gradient_unchecked, sigmoid},
        options::{GDOptions, UpdateRule},
        validation::{validate_rows, validate_theta, validate_theta_finite},
    },
    errors::LogitResult,
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Result of [`gradient_descent`].
///
/// - `theta`: parameters after the last completed update.
/// - `cost_history`: `cost_history[t]` is `J` evaluated right after update `t`.
/// - `iterations`: number of updates performed (`== cost_history.len()`).
/// - `converged`: `true` only when the `tol_cost` early stop fired.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOutcome {
    pub theta: Array1<f64>,
    pub cost_history: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Fit `θ` by batch gradient descent starting from `theta0`.
///
/// For `t = 0 .. opts.iterations`:
/// 1. `h = σ(Xθ)`;
/// 2. update `θ` according to `opts.update_rule`;
/// 3. append `J(θ; opts.lambda)` to the history;
/// 4. stop early if `opts.tol_cost` is set and `|J_t − J_{t−1}| < tol_cost`.
///
/// With `opts.iterations == 0` the function returns `theta0` unchanged and an
/// empty history.
///
/// # Errors
/// - [`ShapeMismatch`](crate::logistic::errors::LogitError::ShapeMismatch) when
///   `len(y) != rows(X)` or `len(θ₀) != cols(X)`.
/// - Option validation errors from [`GDOptions::validate`].
/// - [`NonFiniteTheta`](crate::logistic::errors::LogitError::NonFiniteTheta)
///   if an update diverges to NaN/±inf (learning rate too large).
/// - [`NumericInstability`](crate::logistic::errors::LogitError::NumericInstability)
///   under the `Surface` stability policy.
pub fn gradient_descent(
    x: &DesignMatrix, y: &LabelVector, theta0: ArrayView1<f64>, opts: &GDOptions,
) -> LogitResult<DescentOutcome> {
    opts.validate()?;
    validate_rows("labels", x.nrows(), y.len())?;
    validate_theta(theta0, x.ncols())?;

    let xv = x.view();
    let yv = y.view();
    let mut theta = theta0.to_owned();
    let mut cost_history = Vec::with_capacity(opts.iterations);
    let mut converged = false;

    for t in 0..opts.iterations {
        let step = descent_step(&theta, xv, yv, opts)?;
        theta.scaled_add(-opts.learning_rate, &step);
        validate_theta_finite(theta.view())?;

        let cost =
            cost_and_gradient_unchecked(theta.view(), xv, yv, opts.lambda, opts.policy)?.cost;
        if opts.verbose {
            log::debug!("gradient descent iter {t}: cost = {cost:.6}");
        }
        let previous = cost_history.last().copied();
        cost_history.push(cost);

        if let (Some(tol), Some(prev)) = (opts.tol_cost, previous) {
            if (cost - prev).abs() < tol {
                converged = true;
                break;
            }
        }
    }

    let iterations = cost_history.len();
    if opts.verbose {
        log::debug!(
            "gradient descent finished after {iterations} iterations (converged = {converged})"
        );
    }
    Ok(DescentOutcome { theta, cost_history, iterations, converged })
}

fn descent_step(
    theta: &Array1<f64>, x: ArrayView2<f64>, y: ArrayView1<f64>, opts: &GDOptions,
) -> LogitResult<Array1<f64>> {
    let m = x.nrows() as f64;
    match opts.update_rule {
        UpdateRule::Signed => {
            let residual = sigmoid(&x.dot(theta)) - y;
            Ok(x.t().dot(&residual) / m)
        }
        UpdateRule::AbsoluteResidual => {
            let residual = (sigmoid(&x.dot(theta)) - y).mapv_into(f64::abs);
            Ok(x.t().dot(&residual) / m)
        }
        UpdateRule::Regularized => {
            Ok(cost_and_gradient_unchecked(theta.view(), x, y, opts.lambda, opts.policy)?.grad)
        }
    }
}
