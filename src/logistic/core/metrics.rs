//! Binary classification metrics.
//!
//! Compares expected and predicted 0/1 labels and derives accuracy,
//! precision and recall from the confusion counts. Ratios whose denominator
//! is zero (no predicted positives, no actual positives) are `None`.
use crate::logistic::{
    core::validation::{validate_labels, validate_rows},
    errors::LogitResult,
};
use ndarray::ArrayView1;

/// Confusion counts of a binary classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionCounts {
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
}

impl ConfusionCounts {
    /// Tally `(expected, predicted)` pairs.
    ///
    /// # Errors
    /// - [`ShapeMismatch`](crate::logistic::errors::LogitError::ShapeMismatch)
    ///   with `what = "predicted labels"` when the lengths differ.
    /// - Label validation errors when either side is empty or not binary.
    pub fn from_labels(expected: ArrayView1<f64>, predicted: ArrayView1<f64>) -> LogitResult<Self> {
        validate_rows("predicted labels", expected.len(), predicted.len())?;
        validate_labels(expected)?;
        validate_labels(predicted)?;

        let mut counts = Self::default();
        for (&e, &p) in expected.iter().zip(predicted.iter()) {
            match (e == 1.0, p == 1.0) {
                (true, true) => counts.true_positive += 1,
                (false, false) => counts.true_negative += 1,
                (false, true) => counts.false_positive += 1,
                (true, false) => counts.false_negative += 1,
            }
        }
        Ok(counts)
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// Fraction of correct predictions; `None` only for an empty tally.
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    /// `tp / (tp + fp)`.
    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    /// `tp / (tp + fn)`.
    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logistic::errors::LogitError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Counts and ratios on a small mixed example.
    //
    // Given
    // -----
    // - expected  = [1, 1, 0, 0, 1]
    // - predicted = [1, 0, 0, 1, 1]
    //
    // Expect
    // ------
    // - tp = 2, tn = 1, fp = 1, fn = 1; accuracy 3/5, precision 2/3, recall 2/3.
    fn from_labels_counts_each_cell() {
        let counts = ConfusionCounts::from_labels(
            array![1.0, 1.0, 0.0, 0.0, 1.0].view(),
            array![1.0, 0.0, 0.0, 1.0, 1.0].view(),
        )
        .expect("valid labels");

        assert_eq!(
            counts,
            ConfusionCounts { true_positive: 2, true_negative: 1, false_positive: 1, false_negative: 1 }
        );
        assert_eq!(counts.accuracy(), Some(0.6));
        assert_eq!(counts.precision(), Some(2.0 / 3.0));
        assert_eq!(counts.recall(), Some(2.0 / 3.0));
    }

    #[test]
    // Purpose
    // -------
    // Undefined ratios are `None` and mismatched lengths are rejected.
    //
    // Given
    // -----
    // - All-negative expected and predicted labels; then lengths 2 vs 3.
    //
    // Expect
    // ------
    // - precision and recall `None`, accuracy 1.
    // - `ShapeMismatch { what: "predicted labels", expected: 2, found: 3 }`.
    fn undefined_ratios_and_length_mismatch() {
        let counts =
            ConfusionCounts::from_labels(array![0.0, 0.0].view(), array![0.0, 0.0].view())
                .expect("valid labels");
        assert_eq!(counts.precision(), None);
        assert_eq!(counts.recall(), None);
        assert_eq!(counts.accuracy(), Some(1.0));

        let err = ConfusionCounts::from_labels(array![0.0, 1.0].view(), array![0.0, 1.0, 1.0].view())
            .unwrap_err();
        assert_eq!(err, LogitError::ShapeMismatch { what: "predicted labels", expected: 2, found: 3 });
    }
}
