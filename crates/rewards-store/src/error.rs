//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptRegistry::lookup(id)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::NotFound (this module)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in rewards-api) → 404 "No receipt found for that ID."       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Registration has no failure mode, so lookup is the only source of errors.

use thiserror::Error;

/// Registry errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No receipt was ever registered under this identifier.
    ///
    /// ## When This Occurs
    /// - The identifier came from another process run (the store is volatile)
    /// - The identifier is not a UUID at all
    /// - The identifier was simply never issued
    #[error("Receipt not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given identifier text.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for registry operations.
pub type StoreResult<T> = Result<T, StoreError>;
