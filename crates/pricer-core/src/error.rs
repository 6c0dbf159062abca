//! # Error Types
//!
//! Domain-specific error types for pricer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricer-core errors (this file)                                        │
//! │  ├── CoreError        - Pricing failures                               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pricer-cli errors (app crate)                                         │
//! │  └── CliError         - Catalog loading and lookup failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pure pricing functions in [`crate::pricing`] never fail. These errors
//! only come out of the validated entry point [`crate::pricing::quote_order`]
//! and the validators in [`crate::validation`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An intermediate amount does not fit in a [`crate::Money`].
    ///
    /// ## When This Occurs
    /// - Huge unit price multiplied by a huge quantity
    /// - Shipping cost pushes the total past `i64::MAX` cents
    #[error("Amount overflow while computing {stage}")]
    AmountOverflow { stage: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any pricing happens, so a caller never sees a total
/// computed from malformed inputs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., SKU with whitespace).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
