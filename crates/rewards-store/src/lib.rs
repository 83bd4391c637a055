//! # rewards-store: Receipt Registry for Receipt Rewards
//!
//! Holds every registered receipt for the lifetime of the process. Nothing
//! is written to disk; a restart starts from an empty registry.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Rewards Data Flow                          │
//! │                                                                         │
//! │  POST /receipts/process                 GET /receipts/{id}/points      │
//! │       │ Receipt                              │ id                       │
//! │       ▼                                      ▼                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  rewards-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐          ┌──────────────────────────────┐  │   │
//! │  │   │   ReceiptId   │          │      ReceiptRegistry          │  │   │
//! │  │   │   (id.rs)     │─────────►│      (registry.rs)            │  │   │
//! │  │   │  UUID v4      │          │  RwLock<HashMap<Id, Arc<R>>>  │  │   │
//! │  │   └───────────────┘          └──────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │ ReceiptId                            │ Arc<Receipt>             │
//! │       ▼                                      ▼                          │
//! │  {"id": "..."}                         rewards_core::score              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use rewards_core::{Money, Receipt, ReceiptItem};
//! use rewards_store::{ReceiptRegistry, StoreError};
//!
//! # fn main() -> Result<(), StoreError> {
//! let receipt = Receipt::new(
//!     "Target",
//!     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
//!     NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
//!     Money::from_cents(125),
//!     vec![ReceiptItem::new("Pepsi - 12-oz", Money::from_cents(125))],
//! );
//!
//! let registry = ReceiptRegistry::new();
//! let id = registry.register(receipt);
//!
//! let stored = registry.lookup_str(&id.to_string())?;
//! assert_eq!(stored.retailer(), "Target");
//! assert!(registry.lookup_str("not-a-receipt").is_err());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod id;
pub mod registry;

pub use error::{StoreError, StoreResult};
pub use id::ReceiptId;
pub use registry::ReceiptRegistry;
