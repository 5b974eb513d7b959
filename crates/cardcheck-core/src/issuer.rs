//! # Issuer Classifier
//!
//! Maps digit sequences to issuer labels by their leading digit.
//!
//! ## Flow
//! ```text
//! for each sequence, in input order:
//!     first digit ──► Issuer::from_leading_digit
//!          │
//!          ├── Some(issuer), not yet seen ─► push to `issuers`
//!          ├── Some(issuer), already seen  ─► skip
//!          └── None / empty sequence       ─► warn!("Company not found")
//!                                             push to `unrecognized`
//! ```
//!
//! An unrecognized sequence never aborts the batch. The notice goes out as a
//! `tracing` event, so whoever installs the subscriber decides where it ends
//! up; the same information is also returned in
//! [`IssuerClassification::unrecognized`].

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::types::Issuer;

/// A sequence that contributed no issuer label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnrecognizedIssuer {
    /// Position of the sequence in the classified collection.
    pub index: usize,
    /// Its first element; `None` when the sequence is empty.
    pub leading_digit: Option<u8>,
}

/// Outcome of classifying a collection of sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IssuerClassification {
    /// Distinct issuers in first-occurrence order.
    pub issuers: Vec<Issuer>,
    /// Sequences whose leading digit maps to no issuer.
    pub unrecognized: Vec<UnrecognizedIssuer>,
}

impl IssuerClassification {
    /// Issuer labels in first-occurrence order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.issuers.iter().map(Issuer::label).collect()
    }

    /// Returns true when every sequence mapped to an issuer.
    pub fn is_complete(&self) -> bool {
        self.unrecognized.is_empty()
    }
}

/// Classifies sequences by issuer, recording the ones that match none.
pub fn classify<S: AsRef<[u8]>>(sequences: &[S]) -> IssuerClassification {
    let mut result = IssuerClassification::default();

    for (index, digits) in sequences.iter().enumerate() {
        let leading_digit = digits.as_ref().first().copied();

        match leading_digit.and_then(Issuer::from_leading_digit) {
            Some(issuer) => {
                if !result.issuers.contains(&issuer) {
                    result.issuers.push(issuer);
                }
            }
            None => {
                warn!(index, ?leading_digit, "Company not found");
                result.unrecognized.push(UnrecognizedIssuer {
                    index,
                    leading_digit,
                });
            }
        }
    }

    result
}

/// Returns the distinct issuers of a collection, in first-occurrence order.
///
/// ```rust
/// use cardcheck_core::{classify_issuers, Issuer};
///
/// let mystery: Vec<Vec<u8>> = vec![vec![6, 0, 1, 1, 3, 7, 7, 0, 2, 0, 9, 6, 2, 6, 5, 6, 2, 0, 3]];
/// assert_eq!(classify_issuers(&mystery), vec![Issuer::Discover]);
///
/// let none: Vec<Vec<u8>> = Vec::new();
/// assert!(classify_issuers(&none).is_empty());
/// ```
pub fn classify_issuers<S: AsRef<[u8]>>(sequences: &[S]) -> Vec<Issuer> {
    classify(sequences).issuers
}
