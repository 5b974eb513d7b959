//! # Domain Types
//!
//! Core domain types used throughout cardcheck.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────────────────┐     │
//! │  │ DigitSequence   │   │      Issuer                             │     │
//! │  │  ─────────────  │   │  ─────────────────────────────────────  │     │
//! │  │  Vec<u8>        │   │  3 → Amex        5 → Mastercard         │     │
//! │  │  every elt 0-9  │   │  4 → Visa        6 → Discover           │     │
//! │  │  MSD first      │   │  anything else → not an issuer          │     │
//! │  └─────────────────┘   └─────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every core function also accepts plain `&[u8]` / `AsRef<[u8]>` input;
//! `DigitSequence` is only for callers that want the digit range carried in
//! the type.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::luhn;
use crate::validation::{validate_digits, ValidationResult};

// =============================================================================
// Issuer
// =============================================================================

/// Card issuer, inferred from the leading digit of a sequence.
///
/// The serialized form and `Display` output are the issuer labels
/// `"Amex"`, `"Visa"`, `"Mastercard"` and `"Discover"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Issuer {
    /// Leading digit 3.
    Amex,
    /// Leading digit 4.
    Visa,
    /// Leading digit 5.
    Mastercard,
    /// Leading digit 6.
    Discover,
}

impl Issuer {
    /// All issuers, in leading-digit order.
    pub const ALL: [Issuer; 4] = [
        Issuer::Amex,
        Issuer::Visa,
        Issuer::Mastercard,
        Issuer::Discover,
    ];

    /// Maps a leading digit to its issuer.
    ///
    /// ```rust
    /// use cardcheck_core::Issuer;
    ///
    /// assert_eq!(Issuer::from_leading_digit(4), Some(Issuer::Visa));
    /// assert_eq!(Issuer::from_leading_digit(7), None);
    /// ```
    pub const fn from_leading_digit(digit: u8) -> Option<Issuer> {
        match digit {
            3 => Some(Issuer::Amex),
            4 => Some(Issuer::Visa),
            5 => Some(Issuer::Mastercard),
            6 => Some(Issuer::Discover),
            _ => None,
        }
    }

    /// The leading digit this issuer is recognized by.
    pub const fn leading_digit(&self) -> u8 {
        match self {
            Issuer::Amex => 3,
            Issuer::Visa => 4,
            Issuer::Mastercard => 5,
            Issuer::Discover => 6,
        }
    }

    /// The issuer label.
    pub const fn label(&self) -> &'static str {
        match self {
            Issuer::Amex => "Amex",
            Issuer::Visa => "Visa",
            Issuer::Mastercard => "Mastercard",
            Issuer::Discover => "Discover",
        }
    }
}

impl std::fmt::Display for Issuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Digit Sequence
// =============================================================================

/// A candidate card number whose elements are all known to be 0-9.
///
/// Deserializing from a JSON array enforces the same check as [`Self::new`].
///
/// ```rust
/// use cardcheck_core::DigitSequence;
///
/// let seq = DigitSequence::new(vec![4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8]).unwrap();
/// assert!(seq.is_valid());
/// assert!(DigitSequence::new(vec![4, 10]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Creates a sequence, rejecting any element above 9.
    pub fn new(digits: Vec<u8>) -> ValidationResult<Self> {
        validate_digits(&digits)?;
        Ok(DigitSequence(digits))
    }

    /// The digits, most-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// The leading digit, `None` for the empty sequence.
    #[inline]
    pub fn leading_digit(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// The rightmost (check) digit, `None` for the empty sequence.
    #[inline]
    pub fn check_digit(&self) -> Option<u8> {
        self.0.last().copied()
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Luhn validity of this sequence.
    pub fn is_valid(&self) -> bool {
        luhn::validate(&self.0)
    }

    /// Issuer by leading digit, if recognized.
    pub fn issuer(&self) -> Option<Issuer> {
        self.leading_digit().and_then(Issuer::from_leading_digit)
    }

    /// Consumes the sequence, returning the digits.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for DigitSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for DigitSequence {
    type Error = ValidationError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        DigitSequence::new(digits)
    }
}

impl From<DigitSequence> for Vec<u8> {
    fn from(seq: DigitSequence) -> Self {
        seq.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_from_leading_digit() {
        assert_eq!(Issuer::from_leading_digit(3), Some(Issuer::Amex));
        assert_eq!(Issuer::from_leading_digit(4), Some(Issuer::Visa));
        assert_eq!(Issuer::from_leading_digit(5), Some(Issuer::Mastercard));
        assert_eq!(Issuer::from_leading_digit(6), Some(Issuer::Discover));

        for digit in [0, 1, 2, 7, 8, 9, 10, 255] {
            assert_eq!(Issuer::from_leading_digit(digit), None);
        }
    }

    #[test]
    fn test_issuer_leading_digit_matches_mapping() {
        for issuer in Issuer::ALL {
            assert_eq!(Issuer::from_leading_digit(issuer.leading_digit()), Some(issuer));
        }
    }

    #[test]
    fn test_issuer_labels() {
        let labels: Vec<String> = Issuer::ALL.iter().map(|i| i.to_string()).collect();
        assert_eq!(labels, vec!["Amex", "Visa", "Mastercard", "Discover"]);
    }

    #[test]
    fn test_issuer_serializes_as_label() {
        let json = serde_json::to_string(&Issuer::Mastercard).unwrap();
        assert_eq!(json, "\"Mastercard\"");

        let back: Issuer = serde_json::from_str("\"Discover\"").unwrap();
        assert_eq!(back, Issuer::Discover);
    }

    #[test]
    fn test_digit_sequence_accessors() {
        let seq = DigitSequence::new(vec![3, 7, 1, 6]).unwrap();
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.leading_digit(), Some(3));
        assert_eq!(seq.check_digit(), Some(6));
        assert_eq!(seq.issuer(), Some(Issuer::Amex));
        assert_eq!(seq.digits(), &[3, 7, 1, 6]);
        assert_eq!(seq.into_inner(), vec![3, 7, 1, 6]);
    }

    #[test]
    fn test_digit_sequence_empty() {
        let seq = DigitSequence::new(Vec::new()).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.leading_digit(), None);
        assert_eq!(seq.check_digit(), None);
        assert_eq!(seq.issuer(), None);
        assert!(seq.is_valid());
    }

    #[test]
    fn test_digit_sequence_rejects_out_of_range() {
        let err = DigitSequence::new(vec![4, 5, 99]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDigit { index: 2, value: 99 });
    }

    #[test]
    fn test_digit_sequence_deserialize_checks_range() {
        let ok: DigitSequence = serde_json::from_str("[6, 0, 1, 1]").unwrap();
        assert_eq!(ok.digits(), &[6, 0, 1, 1]);

        assert!(serde_json::from_str::<DigitSequence>("[6, 0, 12]").is_err());
        assert!(serde_json::from_str::<DigitSequence>("[6, -1]").is_err());
    }

    #[test]
    fn test_digit_sequence_serializes_as_array() {
        let seq = DigitSequence::new(vec![5, 5, 3]).unwrap();
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[5,5,3]");
    }
}
