//! Logistic-regression model: fitting, prediction and evaluation.
//!
//! This module wires the kernel to two solvers. Gradient descent runs the
//! crate's own sequential loop; L-BFGS goes through the `LogLikelihood`
//! trait, with `ℓ(θ) = −J(θ)` and `∇ℓ(θ) = −∇J(θ)` so that the optimizer's
//! internal cost is exactly the regularized cross-entropy.
//!
//! Key ideas:
//! - The model's `lambda` and stability policy define the objective for both
//!   solvers; a gradient-descent [`Solver`] only contributes its step size,
//!   iteration budget, update rule, tolerance and verbosity.
//! - After `fit`, [`FitSummary`] keeps `θ̂`, the final cost and the cost
//!   history; prediction reads `θ̂` from there.
use crate::{
    logistic::{
        core::{
            data::{DesignMatrix, LogitData},
            descent::gradient_descent,
            kernel::{compute_cost_and_gradient, sigmoid},
            metrics::ConfusionCounts,
            options::{GDOptions, LogitOptions, Solver, UpdateRule},
            validation::{validate_lambda, validate_rows, validate_theta, validate_threshold},
        },
        errors::{LogitError, LogitResult},
    },
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Grad, LogLikelihood, Theta, maximize},
    },
};
use ndarray::Array1;

/// Snapshot of a completed fit.
///
/// - `theta_hat`: fitted parameters.
/// - `cost`: `J(θ̂)` with the model's `lambda`.
/// - `cost_history`: per-iteration costs for gradient descent; the final cost
///   alone for L-BFGS.
/// - `iterations`: updates (GD) or solver iterations (L-BFGS).
/// - `converged`: early stop fired (GD) or the solver terminated on its own
///   criteria (L-BFGS).
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    pub theta_hat: Array1<f64>,
    pub cost: f64,
    pub cost_history: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Regularized binary logistic regression.
///
/// # Notes
/// - Implements [`LogLikelihood`] so it plugs directly into the Argmin-based
///   optimizer.
/// - `results` is `None` until [`LogitModel::fit`] succeeds; a failed fit
///   leaves the previous results untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitModel {
    /// Model options.
    pub options: LogitOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<FitSummary>,
}

impl LogitModel {
    /// Construct an unfitted model.
    ///
    /// # Errors
    /// - Any [`LogitOptions::validate`] failure.
    pub fn new(options: LogitOptions) -> LogitResult<Self> {
        options.validate()?;
        Ok(Self { options, results: None })
    }

    /// Fit `θ` starting from `theta0` (consumed) and cache a [`FitSummary`].
    ///
    /// ## Steps
    /// 1. Re-validate the options (the fields are public) and check `theta0`
    ///    against the number of design columns.
    /// 2. Run the configured solver:
    ///    - gradient descent with the model's `lambda`/`policy` substituted
    ///      into the solver's [`GDOptions`] and `Signed` promoted to
    ///      `Regularized`, so the steps minimize the model's `J(θ)`;
    ///    - L-BFGS via [`maximize`], moving `theta0` into the executor.
    /// 3. Store the summary in `self.results`.
    ///
    /// ## Errors
    /// - Any [`LogitOptions::validate`] failure.
    /// - Shape/finiteness errors for `theta0`.
    /// - Descent errors (divergence, saturated activations under `Surface`).
    /// - [`LogitError::OptimizationFailed`] for solver failures; model errors
    ///   raised inside the solver keep their original variant.
    pub fn fit(&mut self, theta0: Array1<f64>, data: &LogitData) -> LogitResult<()> {
        self.options.validate()?;
        validate_theta(theta0.view(), data.n_params())?;
        let summary = match &self.options.solver {
            Solver::GradientDescent(gd) => {
                // The signed step is ∇J at λ = 0; add the ridge term.
                let update_rule = match gd.update_rule {
                    UpdateRule::Signed => UpdateRule::Regularized,
                    rule => rule,
                };
                let gd = GDOptions {
                    lambda: self.options.lambda,
                    policy: self.options.policy,
                    update_rule,
                    ..*gd
                };
                let out = gradient_descent(data.design(), data.labels(), theta0.view(), &gd)?;
                let cost = match out.cost_history.last() {
                    Some(&cost) => cost,
                    None => self.cost_at(&out.theta, data)?,
                };
                FitSummary {
                    theta_hat: out.theta,
                    cost,
                    cost_history: out.cost_history,
                    iterations: out.iterations,
                    converged: out.converged,
                }
            }
            Solver::Lbfgs(mle_opts) => {
                let outcome = maximize(self, theta0, data, mle_opts)?;
                let cost = -outcome.value;
                log::debug!("L-BFGS fit: status = {}, J = {cost:.6}", outcome.status);
                FitSummary {
                    theta_hat: outcome.theta_hat,
                    cost,
                    cost_history: vec![cost],
                    iterations: outcome.iterations,
                    converged: outcome.converged,
                }
            }
        };
        self.results = Some(summary);
        Ok(())
    }

    /// `σ(Xθ̂)` for every row of `x`.
    ///
    /// # Errors
    /// - [`LogitError::ModelNotFitted`] before a successful `fit`.
    /// - [`LogitError::ShapeMismatch`] (`what = "features"`) when `cols(X)`
    ///   differs from `len(θ̂)`.
    pub fn predict_proba(&self, x: &DesignMatrix) -> LogitResult<Array1<f64>> {
        let theta_hat = self.theta()?;
        validate_rows("features", theta_hat.len(), x.ncols())?;
        Ok(sigmoid(&x.view().dot(theta_hat)))
    }

    /// Hard 0/1 labels: `1` where `σ(Xθ̂) >= threshold`.
    ///
    /// # Errors
    /// - [`LogitError::InvalidThreshold`] unless `0 < threshold < 1`.
    /// - Everything [`LogitModel::predict_proba`] can return.
    pub fn predict(&self, x: &DesignMatrix, threshold: f64) -> LogitResult<Array1<f64>> {
        validate_threshold(threshold)?;
        let proba = self.predict_proba(x)?;
        Ok(proba.mapv_into(|p| if p >= threshold { 1.0 } else { 0.0 }))
    }

    /// Confusion counts of `predict(data.design(), threshold)` against
    /// `data.labels()`.
    pub fn evaluate(&self, data: &LogitData, threshold: f64) -> LogitResult<ConfusionCounts> {
        let predicted = self.predict(data.design(), threshold)?;
        ConfusionCounts::from_labels(data.labels().view(), predicted.view())
    }

    /// Fitted parameters `θ̂`.
    pub fn theta(&self) -> LogitResult<&Array1<f64>> {
        self.results.as_ref().map(|r| &r.theta_hat).ok_or(LogitError::ModelNotFitted)
    }

    /// Cost history of the last fit.
    pub fn cost_history(&self) -> LogitResult<&[f64]> {
        self.results.as_ref().map(|r| r.cost_history.as_slice()).ok_or(LogitError::ModelNotFitted)
    }

    fn cost_at(&self, theta: &Array1<f64>, data: &LogitData) -> LogitResult<f64> {
        let out = compute_cost_and_gradient(
            theta.view(),
            data.design(),
            data.labels(),
            self.options.lambda,
            self.options.policy,
        )?;
        Ok(out.cost)
    }
}

impl LogLikelihood for LogitModel {
    type Data = LogitData;

    /// `ℓ(θ) = −J(θ)` with the model's `lambda` and policy.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        Ok(-self.cost_at(theta, data)?)
    }

    /// Checks `len(θ) == cols(X)`, finiteness of `θ`, and `λ`.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        validate_theta(theta.view(), data.n_params())?;
        validate_lambda(self.options.lambda)?;
        Ok(())
    }

    /// `∇ℓ(θ) = −∇J(θ)`.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let out = compute_cost_and_gradient(
            theta.view(),
            data.design(),
            data.labels(),
            self.options.lambda,
            self.options.policy,
        )?;
        Ok(-out.grad)
    }
}
