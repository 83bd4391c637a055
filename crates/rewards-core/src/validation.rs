//! # Validation Module
//!
//! Turns a [`ReceiptPayload`] into a [`Receipt`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (serde)                                        │
//! │  ├── Every field present                                               │
//! │  └── Every field the right JSON type                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Text fields non-empty                                             │
//! │  ├── Amounts are "123.45"                                              │
//! │  └── Date is YYYY-MM-DD, time is HH:MM (24h)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt (typed, immutable) → registry                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation stops at the first failing field.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Receipt, ReceiptItem, ReceiptItemPayload, ReceiptPayload};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a whole receipt payload.
///
/// ## Rules
/// - `retailer` must not be empty
/// - `purchaseDate` must be a real calendar date written `YYYY-MM-DD`
/// - `purchaseTime` must be a real time written `HH:MM`
/// - `total` and every item `price` must match `^\d+\.\d{2}$`
/// - every item `shortDescription` must not be empty
/// - `items` may be empty
///
/// ## Example
/// ```rust
/// use rewards_core::validation::validate_receipt;
/// use rewards_core::{ReceiptItemPayload, ReceiptPayload};
///
/// let payload = ReceiptPayload {
///     retailer: "Walgreens".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "08:13".to_string(),
///     items: vec![ReceiptItemPayload {
///         short_description: "Pepsi - 12-oz".to_string(),
///         price: "1.25".to_string(),
///     }],
///     total: "2.65".to_string(),
/// };
///
/// let receipt = validate_receipt(&payload).unwrap();
/// assert_eq!(receipt.total().cents(), 265);
/// ```
pub fn validate_receipt(payload: &ReceiptPayload) -> ValidationResult<Receipt> {
    let retailer = validate_retailer(&payload.retailer)?;
    let purchase_date = validate_purchase_date(&payload.purchase_date)?;
    let purchase_time = validate_purchase_time(&payload.purchase_time)?;
    let total = validate_amount("total", &payload.total)?;

    let items = payload
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(Receipt::new(retailer, purchase_date, purchase_time, total, items))
}

/// Validates one item; `index` is only used to name the failing field.
pub fn validate_item(index: usize, item: &ReceiptItemPayload) -> ValidationResult<ReceiptItem> {
    if item.short_description.is_empty() {
        return Err(ValidationError::required(format!(
            "items[{index}].shortDescription"
        )));
    }

    let price = validate_amount(&format!("items[{index}].price"), &item.price)?;

    Ok(ReceiptItem::new(item.short_description.clone(), price))
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the retailer name.
///
/// Whitespace-only names are accepted; they simply score nothing.
pub fn validate_retailer(retailer: &str) -> ValidationResult<String> {
    if retailer.is_empty() {
        return Err(ValidationError::required("retailer"));
    }

    Ok(retailer.to_string())
}

/// Validates a monetary amount, naming `field` in the error.
pub fn validate_amount(field: &str, amount: &str) -> ValidationResult<Money> {
    if amount.is_empty() {
        return Err(ValidationError::required(field));
    }

    amount
        .parse::<Money>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

/// Validates a purchase date in `YYYY-MM-DD` form.
///
/// ```rust
/// use rewards_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-03-20").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_err()); // no such day
/// assert!(validate_purchase_date("2022-3-20").is_err());  // not zero-padded
/// ```
pub fn validate_purchase_date(date: &str) -> ValidationResult<NaiveDate> {
    const FIELD: &str = "purchaseDate";

    if date.is_empty() {
        return Err(ValidationError::required(FIELD));
    }

    if !matches_shape(date, "dddd-dd-dd") {
        return Err(ValidationError::invalid_format(FIELD, "expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::OutOfRange {
        field: FIELD.to_string(),
        reason: format!("{date} is not a calendar date"),
    })
}

/// Validates a purchase time in 24-hour `HH:MM` form.
pub fn validate_purchase_time(time: &str) -> ValidationResult<NaiveTime> {
    const FIELD: &str = "purchaseTime";

    if time.is_empty() {
        return Err(ValidationError::required(FIELD));
    }

    if !matches_shape(time, "dd:dd") {
        return Err(ValidationError::invalid_format(FIELD, "expected HH:MM"));
    }

    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| ValidationError::OutOfRange {
        field: FIELD.to_string(),
        reason: format!("{time} is not a time of day"),
    })
}

/// `d` in `shape` matches an ASCII digit; any other byte matches itself.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            _ => v == s,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn payload() -> ReceiptPayload {
        ReceiptPayload {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                ReceiptItemPayload {
                    short_description: "Gatorade".to_string(),
                    price: "2.25".to_string(),
                };
                4
            ],
            total: "9.00".to_string(),
        }
    }

    #[test]
    fn test_validate_receipt_ok() {
        let receipt = validate_receipt(&payload()).unwrap();
        assert_eq!(receipt.retailer(), "M&M Corner Market");
        assert_eq!(receipt.purchase_date().day(), 20);
        assert_eq!(receipt.purchase_time().hour(), 14);
        assert_eq!(receipt.purchase_time().minute(), 33);
        assert_eq!(receipt.total().cents(), 900);
        assert_eq!(receipt.items().len(), 4);
    }

    #[test]
    fn test_empty_items_allowed() {
        let mut p = payload();
        p.items.clear();
        assert!(validate_receipt(&p).unwrap().items().is_empty());
    }

    #[test]
    fn test_missing_text_fields() {
        let mut p = payload();
        p.retailer.clear();
        assert_eq!(
            validate_receipt(&p).unwrap_err(),
            ValidationError::required("retailer")
        );

        let mut p = payload();
        p.items[2].short_description.clear();
        assert_eq!(
            validate_receipt(&p).unwrap_err().field(),
            "items[2].shortDescription"
        );
    }

    #[test]
    fn test_whitespace_description_is_kept_verbatim() {
        let mut p = payload();
        p.items[0].short_description = "   Klarbrunn 12-PK 12 FL OZ  ".to_string();
        let receipt = validate_receipt(&p).unwrap();
        assert_eq!(
            receipt.items()[0].short_description(),
            "   Klarbrunn 12-PK 12 FL OZ  "
        );
    }

    #[test]
    fn test_bad_amounts() {
        let mut p = payload();
        p.total = "9".to_string();
        assert_eq!(validate_receipt(&p).unwrap_err().field(), "total");

        let mut p = payload();
        p.items[1].price = "2.2".to_string();
        assert!(matches!(
            validate_receipt(&p).unwrap_err(),
            ValidationError::InvalidFormat { field, .. } if field == "items[1].price"
        ));

        let mut p = payload();
        p.total.clear();
        assert_eq!(
            validate_receipt(&p).unwrap_err(),
            ValidationError::required("total")
        );
    }

    #[test]
    fn test_validate_purchase_date() {
        assert!(validate_purchase_date("2022-01-01").is_ok());
        assert!(validate_purchase_date("2024-02-29").is_ok());

        assert!(matches!(
            validate_purchase_date("2023-02-29"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_purchase_date("2022/01/01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_purchase_date("22-01-01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_purchase_date(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_purchase_time() {
        assert!(validate_purchase_time("00:00").is_ok());
        assert!(validate_purchase_time("23:59").is_ok());

        assert!(matches!(
            validate_purchase_time("24:00"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_purchase_time("14:60"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_purchase_time("2:00"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_purchase_time("14:00:00"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_matches_shape() {
        assert!(matches_shape("2022-01-01", "dddd-dd-dd"));
        assert!(!matches_shape("2022-01-0a", "dddd-dd-dd"));
        assert!(!matches_shape("2022-01-011", "dddd-dd-dd"));
    }
}
