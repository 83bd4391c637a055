//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Item bonus = ceil(price × 0.2)                                         │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    15.00 × 0.2 = 3.0000000000000004 → ceil = 4  ❌ WRONG!               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1500 cents / 500 = 3 exactly → ceil = 3                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts arrive as text (`"35.35"`) and are parsed exactly once, at the
//! data-model boundary. After that every rule works on cents.
//!
//! ## Usage
//! ```rust
//! use rewards_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert_eq!(total.to_string(), "35.35");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::MoneyParseError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays simple; parsing only ever produces
///   non-negative values because the wire format has no sign
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True when the amount has no cents, e.g. `9.00`.
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(125).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(130).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses the receipt wire format: one or more ASCII digits, a dot, and
/// exactly two ASCII digits (`^\d+\.\d{2}$`).
///
/// Signs, exponents, thousands separators and surrounding whitespace are all
/// rejected.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, fraction) = s.split_once('.').ok_or(MoneyParseError::Format)?;

        if whole.is_empty()
            || fraction.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MoneyParseError::Format);
        }

        let cents = whole
            .bytes()
            .chain(fraction.bytes())
            .try_fold(0i64, |acc, b| {
                acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
            })
            .ok_or(MoneyParseError::Overflow)?;

        Ok(Money(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats back into the wire format (`"35.35"`), without a currency sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!("1.25".parse::<Money>().unwrap().cents(), 125);
        assert_eq!("0.00".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("100.00".parse::<Money>().unwrap().cents(), 10000);
        assert_eq!("007.05".parse::<Money>().unwrap().cents(), 705);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));

        for bad in ["1", "1.2", "1.234", ".25", "1.", "-1.00", "+1.00", " 1.00", "1,000.00", "1e2.00", "abc"] {
            assert_eq!(bad.parse::<Money>(), Err(MoneyParseError::Format), "{bad}");
        }
    }

    #[test]
    fn test_parse_overflow() {
        let huge = format!("{}.00", "9".repeat(30));
        assert_eq!(huge.parse::<Money>(), Err(MoneyParseError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(3535).to_string(), "35.35");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_whole_dollars_and_multiples() {
        assert!(Money::from_cents(900).is_whole_dollars());
        assert!(Money::zero().is_whole_dollars());
        assert!(!Money::from_cents(125).is_whole_dollars());

        let quarter = Money::from_cents(25);
        assert!(Money::from_cents(10000).is_multiple_of(quarter));
        assert!(Money::zero().is_multiple_of(quarter));
        assert!(!Money::from_cents(3535).is_multiple_of(quarter));
        assert!(!Money::from_cents(100).is_multiple_of(Money::zero()));
    }
}
