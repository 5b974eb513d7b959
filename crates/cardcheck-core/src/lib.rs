//! # cardcheck-core: Pure Checksum Logic
//!
//! This crate is the **heart** of cardcheck. It validates card-like digit
//! sequences with the Luhn checksum and classifies the failures by issuer.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cardcheck Pipeline                               │
//! │                                                                         │
//! │   Batch (&[S])                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   ┌───────────┐   per sequence   ┌───────────┐                          │
//! │   │   batch   │ ───────────────► │   luhn    │  validate(&[u8]) -> bool │
//! │   │  filter   │ ◄─────────────── │ checksum  │                          │
//! │   └─────┬─────┘                  └───────────┘                          │
//! │         │ invalid subset (borrowed, order kept)                         │
//! │         ▼                                                               │
//! │   ┌───────────┐                                                         │
//! │   │  issuer   │  first digit → Amex | Visa | Mastercard | Discover      │
//! │   │ classify  │  unknown → tracing::warn! + explicit record             │
//! │   └───────────┘                                                         │
//! │                                                                         │
//! │   NO I/O • NO STATE • INPUTS ARE ONLY EVER BORROWED                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`luhn`] - The checksum validator
//! - [`batch`] - Filtering a batch down to its failures
//! - [`issuer`] - Mapping sequences to issuer labels
//! - [`report`] - Serializable summary of one batch
//! - [`types`] - Domain types (`Issuer`, `DigitSequence`)
//! - [`validation`] - Strict digit-range checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cardcheck_core::{classify_issuers, filter_invalid, validate, Issuer};
//!
//! let batch: Vec<Vec<u8>> = vec![
//!     vec![4, 5, 3, 9, 6, 7, 7, 9, 0, 8, 0, 1, 6, 8, 0, 8],
//!     vec![4, 5, 3, 2, 7, 7, 8, 7, 7, 1, 0, 9, 1, 7, 9, 5],
//! ];
//!
//! assert!(validate(&batch[0]));
//!
//! let invalid = filter_invalid(&batch);
//! assert_eq!(invalid.len(), 1);
//! assert_eq!(classify_issuers(&invalid), vec![Issuer::Visa]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod batch;
pub mod error;
pub mod issuer;
pub mod luhn;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use batch::{filter_invalid, partition, BatchPartition};
pub use error::{CoreError, CoreResult, ValidationError};
pub use issuer::{classify, classify_issuers, IssuerClassification, UnrecognizedIssuer};
pub use luhn::{checksum, try_validate, validate};
pub use report::BatchReport;
pub use types::{DigitSequence, Issuer};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest value a single element of a digit sequence may hold.
pub const MAX_DIGIT: u8 = 9;
