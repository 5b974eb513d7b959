//! # Luhn Checksum
//!
//! The checksum validator for one digit sequence.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  digits:     4  5  3  9  6  7  7  9  0  8  0  1  6  8  0  8             │
//! │  position:  15 14 13 12 11 10  9  8  7  6  5  4  3  2  1  0  ◄── start  │
//! │                                                                         │
//! │  odd position  → double, minus 9 when above 9                           │
//! │  even position → unchanged (position 0 is the check digit)              │
//! │                                                                         │
//! │  valid  ⇔  sum % 10 == 0                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The traversal walks the borrowed slice from the back; nothing is reversed
//! or copied. The empty sequence sums to 0 and is therefore valid.

use crate::validation::{validate_digits, ValidationResult};

/// Contribution of one element at the given traversal position.
#[inline]
fn weighted(digit: u8, position: usize) -> u64 {
    let digit = u64::from(digit);
    if position % 2 == 1 {
        let doubled = digit * 2;
        if doubled > 9 {
            doubled - 9
        } else {
            doubled
        }
    } else {
        digit
    }
}

/// Returns the Luhn sum of a sequence.
///
/// Elements above 9 are not rejected; they enter the arithmetic unchanged.
/// Use [`try_validate`] to refuse them instead.
///
/// ```rust
/// use cardcheck_core::luhn::checksum;
///
/// assert_eq!(checksum(&[4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8]), 80);
/// assert_eq!(checksum(&[]), 0);
/// ```
pub fn checksum(digits: &[u8]) -> u64 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &digit)| weighted(digit, position))
        .sum()
}

/// Returns true when the sequence passes the Luhn check.
///
/// ```rust
/// use cardcheck_core::validate;
///
/// assert!(validate(&[4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8]));
/// assert!(!validate(&[4, 5, 3, 2, 7, 7, 8, 7, 7, 1, 0, 9, 1, 7, 9, 5]));
/// ```
pub fn validate(digits: &[u8]) -> bool {
    checksum(digits) % 10 == 0
}

/// Like [`validate`], but rejects elements outside 0-9 first.
pub fn try_validate(digits: &[u8]) -> ValidationResult<bool> {
    validate_digits(digits)?;
    Ok(validate(digits))
}
