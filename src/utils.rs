//! Python-boundary helpers: array extraction and option builders.
//!
//! Everything here is compiled only with the `python-bindings` feature.
//! Arrays cross the boundary as contiguous `f64` slices (or Python
//! sequences) and are copied into owned `ndarray` containers, so the crate's
//! `ndarray` version never has to match the one `numpy` links against.
#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
    PyUntypedArrayMethods, // .shape(), .is_c_contiguous()
};

#[cfg(feature = "python-bindings")]
use crate::{
    logistic::{
        core::{
            data::{DesignMatrix, LabelVector},
            options::{GDOptions, LogitOptions, Solver, StabilityPolicy, UpdateRule},
        },
        errors::LogitError,
    },
    optimization::loglik_optimizer::traits::{LineSearcher, MLEOptions, Tolerances},
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a 1-D array-like into an owned `Array1<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_vector<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(Array1::from(slice.to_vec()))
}

/// Copy a 2-D array-like (C-contiguous `numpy.ndarray`, `pandas.DataFrame`,
/// or a list of equally long rows) into an owned `Array2<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_matrix<'py>(raw_data: &Bound<'py, PyAny>, name: &str) -> PyResult<Array2<f64>> {
    if let Some(matrix) = readonly_matrix(raw_data)? {
        return Ok(matrix);
    }
    if let Ok(obj) = raw_data.call_method("to_numpy", (), None) {
        if let Some(matrix) = readonly_matrix(&obj)? {
            return Ok(matrix);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 2-D numpy.ndarray, pandas.DataFrame, or list of float64 rows"
        ))
    })?;
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().position(|r| r.len() != ncols) {
        return Err(PyValueError::new_err(format!(
            "{name} is ragged: row {bad} has {} columns, expected {ncols}",
            rows[bad].len()
        )));
    }
    let nrows = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| PyValueError::new_err(format!("{name}: {e}")))
}

#[cfg(feature = "python-bindings")]
fn readonly_matrix(obj: &Bound<'_, PyAny>) -> PyResult<Option<Array2<f64>>> {
    let Ok(arr) = obj.extract::<PyReadonlyArray2<f64>>() else {
        return Ok(None);
    };
    if !arr.is_c_contiguous() {
        return Ok(None);
    }
    let shape = arr.shape();
    let (nrows, ncols) = (shape[0], shape[1]);
    match arr.as_slice() {
        Ok(slice) => Array2::from_shape_vec((nrows, ncols), slice.to_vec())
            .map(Some)
            .map_err(|e| PyValueError::new_err(e.to_string())),
        Err(_) => Ok(None),
    }
}

/// Build a [`DesignMatrix`], optionally prepending the bias column.
#[cfg(feature = "python-bindings")]
pub fn extract_design<'py>(raw_x: &Bound<'py, PyAny>, add_bias: bool) -> PyResult<DesignMatrix> {
    let x = extract_matrix(raw_x, "x")?;
    let design = if add_bias { DesignMatrix::with_bias(x.view()) } else { DesignMatrix::new(x) };
    Ok(design?)
}

/// Build a [`LabelVector`] from a 1-D array-like or an `(m, 1)` column.
#[cfg(feature = "python-bindings")]
pub fn extract_labels<'py>(py: Python<'py>, raw_y: &Bound<'py, PyAny>) -> PyResult<LabelVector> {
    if let Ok(column) = raw_y.extract::<PyReadonlyArray2<f64>>() {
        if column.shape().get(1) == Some(&1) {
            let y = Array1::from(column.as_slice().map_err(|_| {
                PyValueError::new_err("y must be a contiguous float64 column")
            })?.to_vec());
            return Ok(LabelVector::new(y)?);
        }
    }
    Ok(LabelVector::new(extract_vector(py, raw_y, "y")?)?)
}

/// Parse a stability policy name (`"clamp"` or `"surface"`).
#[cfg(feature = "python-bindings")]
pub fn extract_policy(policy: Option<&str>, eps: Option<f64>) -> PyResult<StabilityPolicy> {
    let policy_str = policy.unwrap_or("clamp").to_lowercase();
    match policy_str.as_str() {
        "clamp" => match eps {
            Some(eps) => Ok(StabilityPolicy::clamp(eps)?),
            None => Ok(StabilityPolicy::default()),
        },
        "surface" => Ok(StabilityPolicy::Surface),
        other => Err(PyValueError::new_err(format!(
            "invalid stability policy {:?} (expected 'clamp' or 'surface')",
            other
        ))),
    }
}

#[cfg(feature = "python-bindings")]
pub fn extract_gd_opts(
    learning_rate: Option<f64>, iterations: Option<usize>, lambda: Option<f64>,
    update_rule: Option<&str>, tol_cost: Option<f64>, verbose: Option<bool>,
) -> PyResult<GDOptions> {
    let defaults = GDOptions::default();
    let rule = match update_rule {
        Some(name) => name.parse::<UpdateRule>()?,
        None => defaults.update_rule,
    };
    let opts = GDOptions::new(
        learning_rate.unwrap_or(defaults.learning_rate),
        iterations.unwrap_or(defaults.iterations),
        lambda.unwrap_or(defaults.lambda),
        rule,
        tol_cost,
    )?;
    Ok(opts.with_verbose(verbose.unwrap_or(false)))
}

#[cfg(feature = "python-bindings")]
pub fn extract_mle_opts(
    tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    line_searcher: Option<&str>, lbfgs_mem: Option<usize>, verbose: Option<bool>,
) -> PyResult<MLEOptions> {
    // No tolerances at all means "use the defaults", not an error.
    let tols = if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
        MLEOptions::default().tols
    } else {
        // Tolerances::new -> OptResult<Tolerances> -> LogitError -> PyErr
        Tolerances::new(tol_grad, tol_cost, max_iter).map_err(LogitError::from)?
    };
    let ls = match line_searcher {
        Some(name) => name.parse::<LineSearcher>().map_err(LogitError::from)?,
        None => LineSearcher::MoreThuente,
    };
    let opts = MLEOptions::new(tols, ls, lbfgs_mem).map_err(LogitError::from)?;
    Ok(opts.with_verbose(verbose.unwrap_or(false)))
}

/// Assemble [`LogitOptions`] for the Python `LogisticRegression` class.
#[cfg(feature = "python-bindings")]
pub fn build_logit_options(
    lambda: f64, solver: Option<&str>, policy: StabilityPolicy, gd_opts: GDOptions,
    mle_opts: MLEOptions,
) -> PyResult<LogitOptions> {
    let solver_str = solver.unwrap_or("gradient_descent").to_lowercase();
    let solver = match solver_str.as_str() {
        "gradient_descent" | "gd" => Solver::GradientDescent(gd_opts),
        "lbfgs" | "l-bfgs" => Solver::Lbfgs(mle_opts),
        other => {
            return Err(PyValueError::new_err(format!(
                "invalid solver {:?} (expected 'gradient_descent' or 'lbfgs')",
                other
            )));
        }
    };
    Ok(LogitOptions::new(lambda, policy, solver)?)
}
