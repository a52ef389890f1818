//! loglik_optimizer::builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small builders for the L-BFGS solvers used to fit logistic
//! models. They hide Argmin’s generic wiring and apply crate-level options
//! (tolerances, memory size) so higher-level code can request a configured
//! solver without touching Argmin-specific types.
//!
//! Conventions
//! -----------
//! - The builders do **not** set an initial parameter vector or
//!   `max_iters`; those are applied by the runner (`run_lbfgs`).
//! - Errors are reported via [`OptResult`]; `argmin::core::Error` never
//!   leaks across module boundaries.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Build an L-BFGS solver with the Hager–Zhang line search.
///
/// Uses `opts.lbfgs_mem` (or [`DEFAULT_LBFGS_MEM`]) and the optional
/// gradient/cost tolerances from `opts.tols`.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) when Argmin rejects a
///   tolerance.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsHagerZhang::new(HagerZhangLS::new(), mem), opts)
}

/// Build an L-BFGS solver with the More–Thuente line search.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) when Argmin rejects a
///   tolerance.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsMoreThuente::new(MoreThuenteLS::new(), mem), opts)
}

/// Apply the optional gradient and cost-change tolerances to an L-BFGS
/// solver, whatever its line search.
///
/// When a tolerance is `None` the corresponding `with_tolerance_*` call is
/// skipped and Argmin’s default remains in effect.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
