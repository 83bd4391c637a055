//! # Domain Types
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire shape (all text)              Validated shape (typed)             │
//! │  ┌─────────────────────┐            ┌─────────────────────┐             │
//! │  │  ReceiptPayload     │  validate  │  Receipt            │             │
//! │  │  ─────────────────  │ ─────────► │  ─────────────────  │             │
//! │  │  retailer           │            │  retailer: String   │             │
//! │  │  purchaseDate       │            │  NaiveDate          │             │
//! │  │  purchaseTime       │            │  NaiveTime          │             │
//! │  │  total  "35.35"     │            │  total: Money       │             │
//! │  │  items[]            │            │  items: Vec<Item>   │             │
//! │  └─────────────────────┘            └─────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Receipt`] has no setters. Once built it can only be read, which is
//! what makes scoring repeatable for a registered receipt.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Receipt Item
// =============================================================================

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    short_description: String,
    price: Money,
}

impl ReceiptItem {
    pub fn new(short_description: impl Into<String>, price: Money) -> Self {
        ReceiptItem {
            short_description: short_description.into(),
            price,
        }
    }

    /// The description exactly as printed, surrounding whitespace included.
    #[inline]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A validated, immutable purchase receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    total: Money,
    items: Vec<ReceiptItem>,
}

impl Receipt {
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        total: Money,
        items: Vec<ReceiptItem>,
    ) -> Self {
        Receipt {
            retailer: retailer.into(),
            purchase_date,
            purchase_time,
            total,
            items,
        }
    }

    #[inline]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    #[inline]
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    #[inline]
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    #[inline]
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }
}

/// Validates a wire payload into a receipt.
///
/// See [`validation::validate_receipt`] for the rules.
impl TryFrom<&ReceiptPayload> for Receipt {
    type Error = ValidationError;

    fn try_from(payload: &ReceiptPayload) -> Result<Self, Self::Error> {
        validation::validate_receipt(payload)
    }
}

// =============================================================================
// Wire Payloads
// =============================================================================

/// A receipt as submitted by a client.
///
/// ## JSON Shape
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
///   "total": "1.25"
/// }
/// ```
///
/// Every field is required; a missing one fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ReceiptItemPayload>,
    pub total: String,
}

/// An item as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemPayload {
    pub short_description: String,
    pub price: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
            "total": "1.25"
        }"#;

        let payload: ReceiptPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.purchase_date, "2022-01-01");
        assert_eq!(payload.items[0].short_description, "Pepsi - 12-oz");
    }

    #[test]
    fn test_payload_missing_field_is_rejected() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "items": [],
            "total": "1.25"
        }"#;

        let err = serde_json::from_str::<ReceiptPayload>(json).unwrap_err();
        assert!(err.to_string().contains("purchaseTime"));
    }

    #[test]
    fn test_try_from_payload() {
        let payload = ReceiptPayload {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            items: vec![ReceiptItemPayload {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }],
            total: "1.25".to_string(),
        };

        let receipt = Receipt::try_from(&payload).unwrap();
        assert_eq!(receipt.retailer(), "Target");
        assert_eq!(receipt.total(), Money::from_cents(125));
        assert_eq!(receipt.items().len(), 1);
        assert_eq!(receipt.items()[0].short_description(), "Pepsi - 12-oz");
    }
}
