//! # Batch Filter
//!
//! Applies the Luhn check across a batch and separates out the failures.
//!
//! Results borrow from the caller's batch: the sequences are never cloned or
//! reordered, and the relative order of the input is kept.

use tracing::debug;

use crate::luhn;

/// A batch split into passing and failing sequences.
#[derive(Debug)]
pub struct BatchPartition<'a, S> {
    /// Sequences that pass the Luhn check, in input order.
    pub valid: Vec<&'a S>,
    /// Sequences that fail the Luhn check, in input order.
    pub invalid: Vec<&'a S>,
}

impl<S> BatchPartition<'_, S> {
    /// Total number of sequences seen.
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Returns the sequences of a batch that fail the Luhn check.
///
/// ```rust
/// use cardcheck_core::filter_invalid;
///
/// let batch: [Vec<u8>; 2] = [
///     vec![4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8],
///     vec![4, 5, 3, 2, 7, 7, 8, 7, 7, 1, 0, 9, 1, 7, 9, 5],
/// ];
/// let invalid = filter_invalid(&batch);
/// assert_eq!(invalid, vec![&batch[1]]);
/// ```
pub fn filter_invalid<S: AsRef<[u8]>>(batch: &[S]) -> Vec<&S> {
    let invalid: Vec<&S> = batch
        .iter()
        .filter(|digits| !luhn::validate(digits.as_ref()))
        .collect();

    debug!(total = batch.len(), invalid = invalid.len(), "Batch filtered");
    invalid
}

/// Returns the positions of the failing sequences, ascending.
pub fn invalid_indices<S: AsRef<[u8]>>(batch: &[S]) -> Vec<usize> {
    batch
        .iter()
        .enumerate()
        .filter(|(_, digits)| !luhn::validate(digits.as_ref()))
        .map(|(index, _)| index)
        .collect()
}

/// Splits a batch into passing and failing sequences.
pub fn partition<S: AsRef<[u8]>>(batch: &[S]) -> BatchPartition<'_, S> {
    let (valid, invalid): (Vec<&S>, Vec<&S>) = batch
        .iter()
        .partition(|digits| luhn::validate(digits.as_ref()));

    debug!(valid = valid.len(), invalid = invalid.len(), "Batch partitioned");
    BatchPartition { valid, invalid }
}
