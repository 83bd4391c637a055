//! # Error Types
//!
//! Domain-specific error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Receipt payload failures                       │
//! │  └── MoneyParseError  - Amount text that is not "123.45"               │
//! │                                                                         │
//! │  rewards-store errors (separate crate)                                 │
//! │  └── StoreError       - Unknown receipt identifier                     │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What the client sees (JSON body + status)      │
//! │                                                                         │
//! │  Flow: MoneyParseError → ValidationError → CoreError → ApiError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scoring never produces an error: once a [`Receipt`](crate::Receipt)
//! exists, every rule is total over it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The submitted receipt failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning a [`ReceiptPayload`](crate::ReceiptPayload) into a
/// [`Receipt`](crate::Receipt), before the receipt reaches the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., "1.5" for a price, "2022/01/01" for a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is well-formed but outside the accepted range.
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: String, reason: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Errors from parsing a monetary amount such as `"35.35"`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    /// Anything other than digits, a dot, and exactly two fractional digits.
    #[error("expected digits followed by exactly two decimal places, e.g. 12.34")]
    Format,

    #[error("amount is too large")]
    Overflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
