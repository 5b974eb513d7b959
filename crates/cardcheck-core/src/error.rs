//! # Error Types
//!
//! Domain-specific error types for cardcheck-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cardcheck-core errors (this file)                                      │
//! │  ├── ValidationError  - One sequence holds a non-digit element          │
//! │  └── CoreError        - Batch-level failures (which sequence, why)      │
//! │                                                                         │
//! │  cardcheck-cli errors (separate crate)                                  │
//! │  └── CliError         - Config, file and JSON failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → anyhow (main)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The plain checksum functions are total and never produce these errors.
//! Only the strict entry points (`try_validate`, `DigitSequence::new`,
//! `BatchReport::try_build`) do.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a single digit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An element is outside the decimal digit range 0-9.
    ///
    /// `index` is the position within the sequence, most-significant first.
    #[error("element {index} is {value}, expected a digit between 0 and 9")]
    InvalidDigit { index: usize, value: u8 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Batch-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sequence inside a batch failed strict validation.
    #[error("sequence {sequence} is malformed: {source}")]
    InvalidSequence {
        sequence: usize,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
