//! # Scoring Module
//!
//! Computes the reward points for a [`Receipt`].
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                        Condition                     Points   │
//! │  ─  ──────────────────────────  ────────────────────────────  ──────── │
//! │  1  Retailer characters         ASCII letter or digit         1 each   │
//! │  2  Round dollar total          total ends in .00             50       │
//! │  3  Quarter multiple total      cents % 25 == 0               25       │
//! │  4  Item pairs                  every 2 items                 5 each   │
//! │  5  Description length          trimmed len % 3 == 0          ⌈p×0.2⌉  │
//! │  6  Odd purchase day            day of month is odd           6        │
//! │  7  Afternoon purchase          14:00 < time < 16:00          10       │
//! │                                                                         │
//! │  Rules are independent: 2 and 3 both fire on 100.00 (= 75 points).     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is a total function over a validated receipt, so scoring has
//! no error path. It also holds no state: the same receipt always scores the
//! same.
//!
//! ## Example
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use rewards_core::{scoring, Money, Receipt, ReceiptItem};
//!
//! let receipt = Receipt::new(
//!     "Target",
//!     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
//!     NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
//!     Money::from_cents(125),
//!     vec![ReceiptItem::new("Pepsi - 12-oz", Money::from_cents(125))],
//! );
//!
//! // 6 (retailer) + 25 (quarter multiple) + 6 (odd day)
//! assert_eq!(scoring::score(&receipt), 37);
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::money::Money;
use crate::types::{Receipt, ReceiptItem};

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

const QUARTER: Money = Money::from_cents(25);

/// Description bonus is `price × 0.2`, i.e. one point per 500 cents.
const CENTS_PER_DESCRIPTION_POINT: i64 = 500;

/// Afternoon window bounds, in minutes after midnight (both exclusive).
const AFTERNOON_START_MINUTES: u32 = 14 * 60;
const AFTERNOON_END_MINUTES: u32 = 16 * 60;

// =============================================================================
// Breakdown
// =============================================================================

/// Points awarded by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Scores a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// Scores a receipt, keeping each rule's contribution separate.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let breakdown = PointsBreakdown {
        retailer: retailer_points(receipt.retailer()),
        round_dollar: round_dollar_points(receipt.total()),
        quarter_multiple: quarter_multiple_points(receipt.total()),
        item_pairs: item_pair_points(receipt.items().len()),
        descriptions: receipt
            .items()
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(receipt.purchase_date()),
        afternoon: afternoon_points(receipt.purchase_time()),
    };

    debug!(
        retailer = receipt.retailer(),
        retailer_points = breakdown.retailer,
        round_dollar_points = breakdown.round_dollar,
        quarter_multiple_points = breakdown.quarter_multiple,
        item_pair_points = breakdown.item_pairs,
        description_points = breakdown.descriptions,
        odd_day_points = breakdown.odd_day,
        afternoon_points = breakdown.afternoon,
        total = breakdown.total(),
        "Scored receipt"
    );

    breakdown
}

// =============================================================================
// Rules
// =============================================================================

/// Rule 1: one point per ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// Rule 2: total has no cents.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Rule 3: total is a multiple of 0.25.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Rule 4: five points per complete pair of items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Rule 5: `ceil(price × 0.2)` when the trimmed description length is a
/// multiple of three. An all-whitespace description trims to length zero
/// and qualifies.
///
/// ```rust
/// use rewards_core::{scoring::description_points, Money, ReceiptItem};
///
/// let pizza = ReceiptItem::new("Emils Cheese Pizza", Money::from_cents(1225));
/// assert_eq!(description_points(&pizza), 3); // ⌈2.45⌉
///
/// let dew = ReceiptItem::new("Mountain Dew 12PK", Money::from_cents(649));
/// assert_eq!(description_points(&dew), 0); // length 17
/// ```
pub fn description_points(item: &ReceiptItem) -> u64 {
    let trimmed_len = item.short_description().trim().chars().count();
    if trimmed_len % 3 != 0 {
        return 0;
    }

    let cents = item.price().cents();
    if cents <= 0 {
        return 0;
    }

    // ceil(cents / 500); no intermediate sum, so i64::MAX cents is fine
    let whole = cents / CENTS_PER_DESCRIPTION_POINT;
    let partial = i64::from(cents % CENTS_PER_DESCRIPTION_POINT != 0);
    (whole + partial) as u64
}

/// Rule 6: day of month is odd.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Rule 7: strictly after 14:00 and strictly before 16:00.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START_MINUTES && minutes < AFTERNOON_END_MINUTES {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
