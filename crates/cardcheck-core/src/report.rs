//! # Batch Report
//!
//! One serializable summary of a batch: how many sequences passed, which
//! ones failed, and the issuers of the failures.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::batch::invalid_indices;
use crate::error::CoreResult;
use crate::issuer::{classify, UnrecognizedIssuer};
use crate::types::Issuer;
use crate::validation::validate_batch;

/// Summary of checking one batch.
///
/// `unrecognized[i].index` refers to the position in the *batch*, not in the
/// invalid subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchReport {
    /// Number of sequences in the batch.
    pub total: usize,
    /// Number of sequences that pass the Luhn check.
    pub valid_count: usize,
    /// Number of sequences that fail the Luhn check.
    pub invalid_count: usize,
    /// Batch positions of the failing sequences, ascending.
    pub invalid_indices: Vec<usize>,
    /// Distinct issuers of the failing sequences, first-occurrence order.
    pub issuers: Vec<Issuer>,
    /// Failing sequences whose leading digit maps to no issuer.
    pub unrecognized: Vec<UnrecognizedIssuer>,
}

impl BatchReport {
    /// Builds the report. Elements above 9 are checked as-is.
    ///
    /// ```rust
    /// use cardcheck_core::{BatchReport, Issuer};
    ///
    /// let batch: Vec<Vec<u8>> = vec![
    ///     vec![4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8],
    ///     vec![3, 7, 5, 7, 9, 6, 0, 8, 4, 4, 5, 9, 9, 1, 4],
    /// ];
    /// let report = BatchReport::build(&batch);
    /// assert_eq!(report.invalid_indices, vec![1]);
    /// assert_eq!(report.issuers, vec![Issuer::Amex]);
    /// ```
    pub fn build<S: AsRef<[u8]>>(batch: &[S]) -> Self {
        let invalid_indices = invalid_indices(batch);
        let invalid: Vec<&S> = invalid_indices.iter().map(|&i| &batch[i]).collect();
        let classification = classify(&invalid);

        // Re-key unrecognized entries from the invalid subset back to the batch
        let unrecognized = classification
            .unrecognized
            .into_iter()
            .map(|entry| UnrecognizedIssuer {
                index: invalid_indices[entry.index],
                leading_digit: entry.leading_digit,
            })
            .collect();

        let report = BatchReport {
            total: batch.len(),
            valid_count: batch.len() - invalid_indices.len(),
            invalid_count: invalid_indices.len(),
            invalid_indices,
            issuers: classification.issuers,
            unrecognized,
        };

        debug!(
            total = report.total,
            invalid = report.invalid_count,
            issuers = report.issuers.len(),
            "Batch report built"
        );
        report
    }

    /// Builds the report after rejecting any element outside 0-9.
    pub fn try_build<S: AsRef<[u8]>>(batch: &[S]) -> CoreResult<Self> {
        validate_batch(batch)?;
        Ok(Self::build(batch))
    }

    /// Issuer labels of the failing sequences.
    pub fn issuer_labels(&self) -> Vec<&'static str> {
        self.issuers.iter().map(Issuer::label).collect()
    }
}
