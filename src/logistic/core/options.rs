//! Logistic options — configuration for the kernel, gradient descent and model fitting.
//!
//! Purpose
//! -------
//! Collect every tuning knob of the logistic-regression stack in one place:
//! how saturated activations are treated inside the log-loss, how gradient
//! descent updates `θ`, and which solver `LogitModel::fit` runs.
//!
//! Key behaviors
//! -------------
//! - [`StabilityPolicy`] decides between clamping activations inside the
//!   logarithms and surfacing an error when an activation is exactly 0 or 1.
//! - [`UpdateRule`] selects the descent step: the textbook signed residual,
//!   the absolute-residual step of the legacy training scripts, or the full
//!   regularized gradient.
//! - [`GDOptions`] bundles the descent hyperparameters with validated
//!   construction and documented defaults.
//! - [`LogitOptions`] and [`Solver`] configure `LogitModel`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fields are public for ergonomic struct-update syntax; every consumer
//!   re-validates through `validate()` before use, so a hand-built option
//!   struct cannot bypass the checks.
//!
//! Conventions
//! -----------
//! - `lambda` is the ridge strength λ ≥ 0; the bias `θ₀` is never penalized.
//! - Enum choices parse case-insensitively through `FromStr`.
//!
//! Testing notes
//! -------------
//! - Unit tests check defaults, constructor validation and name parsing.
use crate::{
    logistic::{
        core::validation::{
            validate_clamp_eps, validate_lambda, validate_learning_rate, validate_tol_cost,
        },
        errors::{LogitError, LogitResult},
    },
    optimization::{loglik_optimizer::MLEOptions, numerical_stability::PROB_EPS},
};
use std::str::FromStr;

/// Default learning rate `α` for gradient descent.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Default number of gradient-descent iterations.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Default ridge strength used when reporting the cost during descent.
pub const DEFAULT_LAMBDA: f64 = 0.2;

/// Treatment of activations that round to exactly 0 or 1.
///
/// - `Clamp { eps }`: the activations fed to `log` are clamped to
///   `[eps, 1 - eps]`, keeping the cost finite. The gradient still uses the
///   unclamped activation.
/// - `Surface`: fail with [`LogitError::NumericInstability`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StabilityPolicy {
    Clamp { eps: f64 },
    Surface,
}

impl StabilityPolicy {
    /// Validated clamp policy.
    ///
    /// # Errors
    /// - [`LogitError::InvalidClampEpsilon`] unless `0 < eps < 0.5`.
    pub fn clamp(eps: f64) -> LogitResult<Self> {
        validate_clamp_eps(eps)?;
        Ok(StabilityPolicy::Clamp { eps })
    }

    pub fn validate(&self) -> LogitResult<()> {
        match self {
            StabilityPolicy::Clamp { eps } => validate_clamp_eps(*eps),
            StabilityPolicy::Surface => Ok(()),
        }
    }
}

impl Default for StabilityPolicy {
    fn default() -> Self {
        StabilityPolicy::Clamp { eps: PROB_EPS }
    }
}

/// Descent step used by [`gradient_descent`](crate::logistic::core::descent::gradient_descent).
///
/// With `h = σ(Xθ)` and `m` examples:
/// - `Signed`: `θ ← θ − α·Xᵀ(h − y)/m`.
/// - `AbsoluteResidual`: `θ ← θ − α·Xᵀ|h − y|/m`. Every step moves `θ` in
///   the same direction regardless of the sign of the error; kept to reproduce
///   models trained by the legacy scripts.
/// - `Regularized`: `θ ← θ − α·∇J(θ)` with the ridge term included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateRule {
    #[default]
    Signed,
    AbsoluteResidual,
    Regularized,
}

impl FromStr for UpdateRule {
    type Err = LogitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "signed" => Ok(UpdateRule::Signed),
            "absoluteresidual" | "absolute" => Ok(UpdateRule::AbsoluteResidual),
            "regularized" => Ok(UpdateRule::Regularized),
            _ => Err(LogitError::UnknownUpdateRule { name: s.to_string() }),
        }
    }
}

/// GDOptions — hyperparameters for batch gradient descent.
///
/// Fields
/// ------
/// - `learning_rate`: step size `α`, finite and > 0.
/// - `iterations`: maximum number of updates; `0` returns `θ₀` untouched.
/// - `lambda`: ridge strength used to report the cost after every update
///   (and inside the step for [`UpdateRule::Regularized`]).
/// - `update_rule`: see [`UpdateRule`].
/// - `tol_cost`: optional early stop when `|J_t − J_{t−1}| < tol_cost`.
/// - `policy`: log-loss [`StabilityPolicy`].
/// - `verbose`: emit per-iteration `log::debug!` records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GDOptions {
    pub learning_rate: f64,
    pub iterations: usize,
    pub lambda: f64,
    pub update_rule: UpdateRule,
    pub tol_cost: Option<f64>,
    pub policy: StabilityPolicy,
    pub verbose: bool,
}

impl GDOptions {
    /// Construct validated descent options with the default stability policy
    /// and `verbose = false`.
    ///
    /// # Errors
    /// - [`LogitError::InvalidLearningRate`], [`LogitError::InvalidRegularization`]
    ///   or [`LogitError::InvalidTolerance`].
    pub fn new(
        learning_rate: f64, iterations: usize, lambda: f64, update_rule: UpdateRule,
        tol_cost: Option<f64>,
    ) -> LogitResult<Self> {
        let opts = Self {
            learning_rate,
            iterations,
            lambda,
            update_rule,
            tol_cost,
            policy: StabilityPolicy::default(),
            verbose: false,
        };
        opts.validate()?;
        Ok(opts)
    }

    pub fn with_policy(mut self, policy: StabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Re-check every field; called by `gradient_descent` before running.
    pub fn validate(&self) -> LogitResult<()> {
        validate_learning_rate(self.learning_rate)?;
        validate_lambda(self.lambda)?;
        validate_tol_cost(self.tol_cost)?;
        self.policy.validate()
    }
}

impl Default for GDOptions {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            lambda: DEFAULT_LAMBDA,
            update_rule: UpdateRule::default(),
            tol_cost: None,
            policy: StabilityPolicy::default(),
            verbose: false,
        }
    }
}

/// Solver used by `LogitModel::fit`.
#[derive(Debug, Clone, PartialEq)]
pub enum Solver {
    /// Batch gradient descent with the given options. The model's `lambda`
    /// and `policy` override the ones stored here, and the `Signed` rule
    /// runs as `Regularized` so every step includes the ridge term.
    GradientDescent(GDOptions),
    /// L-BFGS on `ℓ(θ) = −J(θ)` through the argmin-backed optimizer.
    Lbfgs(MLEOptions),
}

impl Default for Solver {
    fn default() -> Self {
        Solver::GradientDescent(GDOptions::default())
    }
}

/// LogitOptions — model-level configuration.
///
/// - `lambda`: ridge strength of the fitted objective `J(θ)`.
/// - `policy`: log-loss [`StabilityPolicy`].
/// - `solver`: [`Solver`] and its own options.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitOptions {
    pub lambda: f64,
    pub policy: StabilityPolicy,
    pub solver: Solver,
}

impl LogitOptions {
    /// # Errors
    /// - [`LogitError::InvalidRegularization`], [`LogitError::InvalidClampEpsilon`]
    ///   or any [`GDOptions::validate`] failure of a gradient-descent solver.
    /// - [`LogitError::UpdateRuleIgnoresLambda`] for the absolute-residual
    ///   rule with `lambda > 0`.
    pub fn new(lambda: f64, policy: StabilityPolicy, solver: Solver) -> LogitResult<Self> {
        let opts = Self { lambda, policy, solver };
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> LogitResult<()> {
        validate_lambda(self.lambda)?;
        self.policy.validate()?;
        match &self.solver {
            Solver::GradientDescent(gd) => {
                if gd.update_rule == UpdateRule::AbsoluteResidual && self.lambda > 0.0 {
                    return Err(LogitError::UpdateRuleIgnoresLambda { lambda: self.lambda });
                }
                gd.validate()
            }
            Solver::Lbfgs(_) => Ok(()),
        }
    }
}

impl Default for LogitOptions {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
            policy: StabilityPolicy::default(),
            solver: Solver::default(),
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
    // - Documented defaults of `GDOptions`, `StabilityPolicy` and `LogitOptions`.
    // - Validation in the constructors.
    // - `UpdateRule` parsing.
    // - Rejection of the absolute-residual rule under a positive model λ.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Defaults match the legacy `GradientDescent(X, y, θ, 0.01, 1000)` call
    // with the reporting λ of 0.2.
    //
    // Given
    // -----
    // - `GDOptions::default()`.
    //
    // Expect
    // ------
    // - α = 0.01, 1000 iterations, λ = 0.2, signed rule, no early stop,
    //   clamp at 1e-15, quiet.
    fn gd_options_default_matches_legacy_call() {
        let opts = GDOptions::default();

        assert_eq!(opts.learning_rate, 0.01);
        assert_eq!(opts.iterations, 1000);
        assert_eq!(opts.lambda, 0.2);
        assert_eq!(opts.update_rule, UpdateRule::Signed);
        assert_eq!(opts.tol_cost, None);
        assert_eq!(opts.policy, StabilityPolicy::Clamp { eps: 1e-15 });
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // `GDOptions::new` rejects out-of-range hyperparameters.
    //
    // Given
    // -----
    // - Negative α, negative λ, zero tolerance.
    //
    // Expect
    // ------
    // - The matching `LogitError` variant for each.
    fn gd_options_new_validates_fields() {
        assert!(matches!(
            GDOptions::new(-0.1, 10, 0.0, UpdateRule::Signed, None),
            Err(LogitError::InvalidLearningRate { .. })
        ));
        assert_eq!(
            GDOptions::new(0.1, 10, -1.0, UpdateRule::Signed, None),
            Err(LogitError::InvalidRegularization { value: -1.0 })
        );
        assert!(matches!(
            GDOptions::new(0.1, 10, 0.0, UpdateRule::Signed, Some(0.0)),
            Err(LogitError::InvalidTolerance { .. })
        ));
        assert!(GDOptions::new(0.1, 0, 0.0, UpdateRule::Regularized, Some(1e-9)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Update-rule names parse case-insensitively and tolerate separators.
    //
    // Given
    // -----
    // - `"Signed"`, `"absolute_residual"`, `"ABSOLUTE-RESIDUAL"`, `"regularized"`, `"momentum"`.
    //
    // Expect
    // ------
    // - The corresponding variants; `UnknownUpdateRule` for `"momentum"`.
    fn update_rule_parses_names() {
        assert_eq!("Signed".parse(), Ok(UpdateRule::Signed));
        assert_eq!("absolute_residual".parse(), Ok(UpdateRule::AbsoluteResidual));
        assert_eq!("ABSOLUTE-RESIDUAL".parse(), Ok(UpdateRule::AbsoluteResidual));
        assert_eq!("regularized".parse(), Ok(UpdateRule::Regularized));
        assert_eq!(
            "momentum".parse::<UpdateRule>(),
            Err(LogitError::UnknownUpdateRule { name: "momentum".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // Clamp epsilon and model options are validated.
    //
    // Given
    // -----
    // - `StabilityPolicy::clamp(0.0)` and `LogitOptions::new` with λ = NaN.
    //
    // Expect
    // ------
    // - `InvalidClampEpsilon` and `InvalidRegularization`.
    fn policy_and_model_options_are_validated() {
        assert_eq!(StabilityPolicy::clamp(0.0), Err(LogitError::InvalidClampEpsilon { value: 0.0 }));
        assert!(StabilityPolicy::Surface.validate().is_ok());

        let err = LogitOptions::new(f64::NAN, StabilityPolicy::Surface, Solver::default()).unwrap_err();
        assert!(matches!(err, LogitError::InvalidRegularization { .. }));
    }

    #[test]
    // Purpose
    // -------
    // A model with λ > 0 cannot pair with the absolute-residual rule, whose
    // steps carry no ridge term.
    //
    // Given
    // -----
    // - Absolute-residual descent options inside models with λ = 0.5 and λ = 0.
    //
    // Expect
    // ------
    // - `UpdateRuleIgnoresLambda { lambda: 0.5 }` for λ = 0.5; λ = 0 is accepted.
    fn absolute_residual_rule_requires_zero_lambda() {
        let gd = GDOptions::new(0.1, 10, 0.0, UpdateRule::AbsoluteResidual, None)
            .expect("valid descent options");

        assert_eq!(
            LogitOptions::new(0.5, StabilityPolicy::default(), Solver::GradientDescent(gd)),
            Err(LogitError::UpdateRuleIgnoresLambda { lambda: 0.5 })
        );
        assert!(LogitOptions::new(0.0, StabilityPolicy::default(), Solver::GradientDescent(gd)).is_ok());
    }
}
