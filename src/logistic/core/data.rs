//! Training data containers for logistic regression.
//!
//! Purpose
//! -------
//! Provide small, validated containers for the design matrix `X`, the label
//! vector `y`, and their pairing, so the kernel and the optimizers can rely
//! on clean inputs without re-scanning them on every evaluation.
//!
//! Key behaviors
//! -------------
//! - [`DesignMatrix`] enforces `m > 0`, `n > 0` and finite entries; it can
//!   also be built from raw features by prepending a bias column of ones.
//! - [`LabelVector`] enforces non-empty, finite, binary labels and accepts
//!   either a flat vector or an `(m × 1)` column.
//! - [`LogitData`] pairs the two and enforces `rows(X) == len(y)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Containers are read-only after construction; fields are private and only
//!   views are handed out.
//! - When built via [`DesignMatrix::with_bias`], column 0 is the bias column
//!   and is the one excluded from the ridge penalty.
//!
//! Downstream usage
//! ----------------
//! - Construct these types at the boundary where raw arrays enter the crate
//!   (Rust callers, Python bindings), then pass references into
//!   `compute_cost_and_gradient`, `gradient_descent` or `LogitModel::fit`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction (happy path, bias prepending, column
//!   flattening) and each rejection path.
use crate::logistic::{
    core::validation::{validate_design, validate_labels, validate_rows},
    errors::LogitResult,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

/// `DesignMatrix` — validated feature matrix `X` (m × n).
///
/// Invariants
/// ----------
/// - `nrows() > 0` and `ncols() > 0`.
/// - All entries are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    x: Array2<f64>,
}

impl DesignMatrix {
    /// Construct a validated design matrix from `x` as-is.
    ///
    /// # Errors
    /// - [`LogitError::EmptyDesign`](crate::logistic::errors::LogitError::EmptyDesign) if `x` has no rows or no columns.
    /// - [`LogitError::NonFiniteDesign`](crate::logistic::errors::LogitError::NonFiniteDesign) for the first NaN/±inf entry.
    pub fn new(x: Array2<f64>) -> LogitResult<Self> {
        validate_design(x.view())?;
        Ok(Self { x })
    }

    /// Build `[1 | features]`, i.e. prepend a column of ones to the raw
    /// features so that `θ₀` acts as the intercept.
    ///
    /// A feature matrix with zero columns yields an intercept-only design.
    ///
    /// # Errors
    /// - [`LogitError::EmptyDesign`](crate::logistic::errors::LogitError::EmptyDesign) if `features` has no rows.
    /// - [`LogitError::NonFiniteDesign`](crate::logistic::errors::LogitError::NonFiniteDesign) with the column index shifted by one.
    pub fn with_bias(features: ArrayView2<f64>) -> LogitResult<Self> {
        let (m, k) = features.dim();
        let mut x = Array2::<f64>::ones((m, k + 1));
        x.slice_mut(s![.., 1..]).assign(&features);
        Self::new(x)
    }

    /// Number of examples `m`.
    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    /// Number of parameters `n` (columns, bias included).
    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.x
    }
}

/// `LabelVector` — validated binary targets `y` (length m).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVector {
    y: Array1<f64>,
}

impl LabelVector {
    /// Construct validated labels.
    ///
    /// # Errors
    /// - [`LogitError::EmptyLabels`](crate::logistic::errors::LogitError::EmptyLabels), [`LogitError::NonFiniteLabel`](crate::logistic::errors::LogitError::NonFiniteLabel) or
    ///   [`LogitError::InvalidLabel`](crate::logistic::errors::LogitError::InvalidLabel).
    pub fn new(y: Array1<f64>) -> LogitResult<Self> {
        validate_labels(y.view())?;
        Ok(Self { y })
    }

    /// Accept labels shaped as an `(m × 1)` column and flatten them.
    ///
    /// # Errors
    /// - [`LogitError::ShapeMismatch`](crate::logistic::errors::LogitError::ShapeMismatch) with `what = "label columns"` when the
    ///   input does not have exactly one column.
    /// - Any error from [`LabelVector::new`].
    pub fn from_column(y: ArrayView2<f64>) -> LogitResult<Self> {
        validate_rows("label columns", 1, y.ncols())?;
        Self::new(y.column(0).to_owned())
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always `false` for a constructed vector; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}

/// `LogitData` — a design matrix and its labels with matching row counts.
///
/// This is the `Data` payload the optimizer hands back to the model on every
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitData {
    x: DesignMatrix,
    y: LabelVector,
}

impl LogitData {
    /// Pair `x` and `y`.
    ///
    /// # Errors
    /// - [`LogitError::ShapeMismatch`](crate::logistic::errors::LogitError::ShapeMismatch) with `what = "labels"` when
    ///   `len(y) != rows(X)`.
    pub fn new(x: DesignMatrix, y: LabelVector) -> LogitResult<Self> {
        validate_rows("labels", x.nrows(), y.len())?;
        Ok(Self { x, y })
    }

    /// Convenience constructor from raw arrays, prepending the bias column.
    pub fn from_features(features: ArrayView2<f64>, y: Array1<f64>) -> LogitResult<Self> {
        Self::new(DesignMatrix::with_bias(features)?, LabelVector::new(y)?)
    }

    pub fn design(&self) -> &DesignMatrix {
        &self.x
    }

    pub fn labels(&self) -> &LabelVector {
        &self.y
    }

    pub fn n_examples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_params(&self) -> usize {
        self.x.ncols()
    }
}

impl From<LogitData> for (DesignMatrix, LabelVector) {
    fn from(data: LogitData) -> Self {
        (data.x, data.y)
    }
}
