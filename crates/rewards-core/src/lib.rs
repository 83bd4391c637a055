//! # rewards-core: Pure Business Logic for Receipt Rewards
//!
//! This crate holds the receipt model and the point-scoring rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Rewards Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rewards-api (axum)                           │   │
//! │  │   POST /receipts/process        GET /receipts/{id}/points       │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │ validate                    │ score                  │
//! │  ┌───────────────▼─────────────────────────────▼───────────────────┐   │
//! │  │              ★ rewards-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  scoring  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  payload  │  │  7 rules  │  │   │
//! │  │   │   Item    │  │  (cents)  │  │ → Receipt │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                  │ register / lookup                                    │
//! │  ┌───────────────▼─────────────────────────────────────────────────┐   │
//! │  │                rewards-store (ReceiptRegistry)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Receipt`, `ReceiptItem` and their wire payloads
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Payload → receipt validation
//! - [`scoring`] - The point rules
//!
//! ## Example Usage
//!
//! ```rust
//! use rewards_core::{scoring, Receipt, ReceiptItemPayload, ReceiptPayload};
//!
//! let payload = ReceiptPayload {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     items: vec![ReceiptItemPayload {
//!         short_description: "Pepsi - 12-oz".to_string(),
//!         price: "1.25".to_string(),
//!     }],
//!     total: "1.25".to_string(),
//! };
//!
//! let receipt = Receipt::try_from(&payload).unwrap();
//! assert_eq!(scoring::score(&receipt), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, MoneyParseError, ValidationError};
pub use money::Money;
pub use scoring::{score, score_breakdown, PointsBreakdown};
pub use types::*;
