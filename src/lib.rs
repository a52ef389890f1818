//! rust_logreg — regularized logistic regression with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the logistic-regression kernel, gradient descent and the fitted
//! model to Python via the `_rust_logreg` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`logistic` and `optimization`) as the
//!   public crate surface.
//! - With the `python-bindings` feature, define the `#[pyfunction]`s
//!   (`sigmoid`, `cost_and_gradient`, `gradient_descent`), the
//!   `LogisticRegression` `#[pyclass]`, and the `#[pymodule]` initializer.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion and error mapping.
//! - Python inputs are copied into validated Rust containers
//!   (`DesignMatrix`, `LabelVector`) before any computation.
//!
//! Conventions
//! -----------
//! - The free functions take the design matrix as given (bias column
//!   included); `LogisticRegression(fit_intercept=True)` prepends it for you.
//! - `lambda_` is the ridge strength (trailing underscore because `lambda` is
//!   a Python keyword).
//! - Errors from core Rust code are converted to Python `ValueError`s at the
//!   PyO3 boundary.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_logit_pipeline.rs`.

pub mod logistic;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    logistic::{
        core::{descent, kernel},
        models::logit::LogitModel,
    },
    utils::{
        build_logit_options, extract_design, extract_gd_opts, extract_labels, extract_mle_opts,
        extract_policy, extract_vector,
    },
};

/// Element-wise logistic of a 1-D array-like.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "sigmoid", signature = (z), text_signature = "(z, /)")]
fn py_sigmoid<'py>(py: Python<'py>, z: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let z = extract_vector(py, z, "z")?;
    Ok(kernel::sigmoid(&z).to_vec().into_pyarray(py))
}

/// Regularized cost and gradient at `theta`; returns `(cost, grad)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "cost_and_gradient",
    signature = (theta, x, y, lambda_ = 0.0, policy = None, eps = None),
    text_signature = "(theta, x, y, /, lambda_=0.0, policy='clamp', eps=None)"
)]
fn py_cost_and_gradient<'py>(
    py: Python<'py>, theta: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
    lambda_: f64, policy: Option<&str>, eps: Option<f64>,
) -> PyResult<(f64, Bound<'py, PyArray1<f64>>)> {
    let theta = extract_vector(py, theta, "theta")?;
    let design = extract_design(x, false)?;
    let labels = extract_labels(py, y)?;
    let policy = extract_policy(policy, eps)?;
    let out = kernel::compute_cost_and_gradient(theta.view(), &design, &labels, lambda_, policy)?;
    Ok((out.cost, out.grad.to_vec().into_pyarray(py)))
}

/// Batch gradient descent; returns `(theta, cost_history)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "gradient_descent",
    signature = (
        x,
        y,
        theta0,
        learning_rate = None,
        iterations = None,
        lambda_ = None,
        update_rule = None,
        tol_cost = None,
        policy = None,
        eps = None,
    ),
    text_signature = "(x, y, theta0, /, learning_rate=0.01, iterations=1000, lambda_=0.2, \
                      update_rule='signed', tol_cost=None, policy='clamp', eps=None)"
)]
fn py_gradient_descent<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, theta0: &Bound<'py, PyAny>,
    learning_rate: Option<f64>, iterations: Option<usize>, lambda_: Option<f64>,
    update_rule: Option<&str>, tol_cost: Option<f64>, policy: Option<&str>, eps: Option<f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Vec<f64>)> {
    let design = extract_design(x, false)?;
    let labels = extract_labels(py, y)?;
    let theta0 = extract_vector(py, theta0, "theta0")?;
    let opts = extract_gd_opts(learning_rate, iterations, lambda_, update_rule, tol_cost, None)?
        .with_policy(extract_policy(policy, eps)?);
    let out = descent::gradient_descent(&design, &labels, theta0.view(), &opts)?;
    Ok((out.theta.to_vec().into_pyarray(py), out.cost_history))
}

/// LogisticRegression — Python-facing wrapper for [`LogitModel`].
///
/// Purpose
/// -------
/// Expose fitting, prediction and scoring to Python while preserving the
/// Rust invariants and error handling.
///
/// Parameters
/// ----------
/// Constructed from Python via `LogisticRegression(lambda_=0.2, solver='gradient_descent', ...)`:
/// - `lambda_`: ridge strength of the objective.
/// - `solver`: `'gradient_descent'` or `'lbfgs'`.
/// - `learning_rate`, `iterations`, `update_rule`, `tol_cost`: descent options.
/// - `tol_grad`, `max_iter`, `line_searcher`, `lbfgs_mem`: L-BFGS options.
/// - `policy`, `eps`: log-loss stability policy.
/// - `fit_intercept`: prepend a bias column to every `x` passed in.
/// - `verbose`: per-iteration logging (descent) or the slog observer (L-BFGS).
///
/// Fields
/// ------
/// - `inner`: [`LogitModel`] holding options and the last fit.
/// - `fit_intercept`: whether `x` gets a bias column on the way in.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_logreg.logistic")]
pub struct LogisticRegression {
    inner: LogitModel,
    fit_intercept: bool,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LogisticRegression {
    #[new]
    #[pyo3(
        signature = (
            lambda_ = 0.2,
            solver = None,
            learning_rate = None,
            iterations = None,
            update_rule = None,
            tol_cost = None,
            tol_grad = None,
            max_iter = None,
            line_searcher = None,
            lbfgs_mem = None,
            policy = None,
            eps = None,
            fit_intercept = true,
            verbose = None,
        ),
        text_signature = "(lambda_=0.2, solver='gradient_descent', learning_rate=0.01, \
                          iterations=1000, update_rule='signed', tol_cost=None, tol_grad=None, \
                          max_iter=None, line_searcher=None, lbfgs_mem=None, policy='clamp', \
                          eps=None, fit_intercept=True, verbose=False)"
    )]
    pub fn new(
        lambda_: f64, solver: Option<&str>, learning_rate: Option<f64>, iterations: Option<usize>,
        update_rule: Option<&str>, tol_cost: Option<f64>, tol_grad: Option<f64>,
        max_iter: Option<usize>, line_searcher: Option<&str>, lbfgs_mem: Option<usize>,
        policy: Option<&str>, eps: Option<f64>, fit_intercept: bool, verbose: Option<bool>,
    ) -> PyResult<Self> {
        let policy = extract_policy(policy, eps)?;
        let gd_opts =
            extract_gd_opts(learning_rate, iterations, Some(lambda_), update_rule, tol_cost, verbose)?;
        let mle_opts =
            extract_mle_opts(tol_grad, tol_cost, max_iter, line_searcher, lbfgs_mem, verbose)?;
        let options = build_logit_options(lambda_, solver, policy, gd_opts, mle_opts)?;
        Ok(LogisticRegression { inner: LogitModel::new(options)?, fit_intercept })
    }

    /// Fit on `(x, y)`; `theta0` defaults to zeros.
    #[pyo3(signature = (x, y, theta0 = None), text_signature = "(self, x, y, /, theta0=None)")]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
        theta0: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<()> {
        let design = extract_design(x, self.fit_intercept)?;
        let labels = extract_labels(py, y)?;
        let theta0 = match theta0 {
            Some(raw) => extract_vector(py, raw, "theta0")?,
            None => Array1::zeros(design.ncols()),
        };
        let data = logistic::core::data::LogitData::new(design, labels)?;
        self.inner.fit(theta0, &data)?;
        Ok(())
    }

    #[pyo3(signature = (x), text_signature = "(self, x, /)")]
    pub fn predict_proba<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let design = extract_design(x, self.fit_intercept)?;
        Ok(self.inner.predict_proba(&design)?.to_vec().into_pyarray(py))
    }

    #[pyo3(signature = (x, threshold = 0.5), text_signature = "(self, x, /, threshold=0.5)")]
    pub fn predict<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, threshold: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let design = extract_design(x, self.fit_intercept)?;
        Ok(self.inner.predict(&design, threshold)?.to_vec().into_pyarray(py))
    }

    /// Accuracy of `predict(x, threshold)` against `y`.
    #[pyo3(signature = (x, y, threshold = 0.5), text_signature = "(self, x, y, /, threshold=0.5)")]
    pub fn score<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, threshold: f64,
    ) -> PyResult<f64> {
        let design = extract_design(x, self.fit_intercept)?;
        let labels = extract_labels(py, y)?;
        let data = logistic::core::data::LogitData::new(design, labels)?;
        let counts = self.inner.evaluate(&data, threshold)?;
        Ok(counts.accuracy().unwrap_or(0.0))
    }

    #[getter]
    pub fn theta(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.theta()?.to_vec())
    }

    #[getter]
    pub fn cost_history(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.cost_history()?.to_vec())
    }

    #[getter]
    pub fn cost(&self) -> PyResult<f64> {
        Ok(self.summary()?.cost)
    }

    #[getter]
    pub fn iterations(&self) -> PyResult<usize> {
        Ok(self.summary()?.iterations)
    }

    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        Ok(self.summary()?.converged)
    }
}

#[cfg(feature = "python-bindings")]
impl LogisticRegression {
    fn summary(&self) -> PyResult<&logistic::models::logit::FitSummary> {
        match &self.inner.results {
            Some(summary) => Ok(summary),
            None => Err(logistic::errors::LogitError::ModelNotFitted.into()),
        }
    }
}

/// _rust_logreg — PyO3 module initializer for the Python extension.
///
/// Creates the `logistic` submodule, attaches it to `_rust_logreg`, and
/// registers it in `sys.modules` so `rust_logreg.logistic` is importable
/// with dot notation.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_logreg<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let logistic_mod = PyModule::new(_py, "logistic")?;
    logistic_module(_py, m, &logistic_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_logreg.logistic", logistic_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn logistic_module<'py>(
    _py: Python, rust_logreg: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_sigmoid, m)?)?;
    m.add_function(wrap_pyfunction!(py_cost_and_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(py_gradient_descent, m)?)?;
    m.add_class::<LogisticRegression>()?;
    rust_logreg.add_submodule(m)?;
    Ok(())
}
