//! # Validation Module
//!
//! Strict input checks for digit sequences.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                       │
//! │  └── u8 elements: negatives and fractions never reach the core          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (opt-in)                                          │
//! │  └── every element must be 0-9                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: luhn::validate                                                │
//! │  └── total over any &[u8]; elements above 9 enter the sum unchanged     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cardcheck_core::validation::validate_digits;
//!
//! assert!(validate_digits(&[4, 5, 3, 9]).is_ok());
//! assert!(validate_digits(&[4, 15, 3, 9]).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::MAX_DIGIT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that every element of a sequence is a decimal digit.
///
/// Reports the first offending element. The empty sequence passes.
pub fn validate_digits(digits: &[u8]) -> ValidationResult<()> {
    match digits.iter().position(|&d| d > MAX_DIGIT) {
        Some(index) => Err(ValidationError::InvalidDigit {
            index,
            value: digits[index],
        }),
        None => Ok(()),
    }
}

/// Validates every sequence of a batch, naming the first malformed one.
pub fn validate_batch<S: AsRef<[u8]>>(batch: &[S]) -> CoreResult<()> {
    for (sequence, digits) in batch.iter().enumerate() {
        validate_digits(digits.as_ref())
            .map_err(|source| CoreError::InvalidSequence { sequence, source })?;
    }
    Ok(())
}
