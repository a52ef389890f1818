//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! This selects an L-BFGS solver with either Hager–Zhang or More–Thuente line
//! search, wraps the model in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`),
//! and delegates the run to `run_lbfgs`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{LineSearcher, LogLikelihood, MLEOptions},
    },
};

/// Maximize a log-likelihood `ℓ(θ)` using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` exposing `c(θ) = -ℓ(θ)`.
/// - Builds the solver selected by `opts.line_searcher` and runs it.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors and runtime errors from `run_lbfgs`.
///
/// # Example
/// ```no_run
/// use ndarray::{array, Array1};
/// use rust_logreg::optimization::{
///     errors::OptResult,
///     loglik_optimizer::{maximize, LogLikelihood, MLEOptions},
/// };
///
/// struct Bowl;
/// impl LogLikelihood for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Array1<f64>, _: &()) -> OptResult<f64> {
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &Array1<f64>, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Bowl, array![0.1, -0.2, 0.3], &(), &MLEOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), rust_logreg::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::OptError,
        loglik_optimizer::{Grad, traits::Tolerances},
    };
    use ndarray::array;

    // ℓ(θ) = -Σ (θ_i - c_i)², maximized at θ = c.
    struct ShiftedBowl;

    impl LogLikelihood for ShiftedBowl {
        type Data = Theta;

        fn value(&self, theta: &Theta, center: &Theta) -> OptResult<f64> {
            Ok(-(theta - center).mapv(|d| d * d).sum())
        }

        fn check(&self, theta: &Theta, center: &Theta) -> OptResult<()> {
            if theta.len() != center.len() {
                return Err(OptError::ShapeMismatch {
                    what: "theta",
                    expected: center.len(),
                    found: theta.len(),
                });
            }
            Ok(())
        }

        fn grad(&self, theta: &Theta, center: &Theta) -> OptResult<Grad> {
            Ok((theta - center).mapv(|d| -2.0 * d))
        }
    }

    #[test]
    // Purpose
    // -------
    // End-to-end check that `maximize` finds the optimum of a concave
    // quadratic with either line search.
    //
    // Given
    // -----
    // - Center `c = [1, -2]`, start at the origin, 100 iterations.
    //
    // Expect
    // ------
    // - `theta_hat ≈ c` within 1e-6 and `value ≈ 0`.
    fn maximize_recovers_center_of_quadratic() {
        let center = array![1.0, -2.0];
        for ls in [LineSearcher::MoreThuente, LineSearcher::HagerZhang] {
            let tols = Tolerances::new(Some(1e-10), None, Some(100)).expect("valid tolerances");
            let opts = MLEOptions::new(tols, ls, None).expect("valid options");

            let out = maximize(&ShiftedBowl, array![0.0, 0.0], &center, &opts)
                .expect("maximize should succeed");

            assert!((out.theta_hat[0] - 1.0).abs() < 1e-6, "{ls:?}: {:?}", out.theta_hat);
            assert!((out.theta_hat[1] + 2.0).abs() < 1e-6, "{ls:?}: {:?}", out.theta_hat);
            assert!(out.value.abs() < 1e-8);
        }
    }

    #[test]
    // Purpose
    // -------
    // `check` runs before any solver work and its error is returned as-is.
    //
    // Given
    // -----
    // - A 3-element start against a 2-element center.
    //
    // Expect
    // ------
    // - `OptError::ShapeMismatch { expected: 2, found: 3 }`.
    fn maximize_propagates_check_failure() {
        let center = array![1.0, -2.0];

        let err = maximize(&ShiftedBowl, array![0.0, 0.0, 0.0], &center, &MLEOptions::default())
            .unwrap_err();

        assert_eq!(err, OptError::ShapeMismatch { what: "theta", expected: 2, found: 3 });
    }
}
