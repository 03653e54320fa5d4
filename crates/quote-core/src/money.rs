//! # Money Module
//!
//! Provides the `Amount` type for quote arithmetic and its display format.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A quote is a drafting aid, not a ledger                                │
//! │                                                                         │
//! │  Quantities are fractional (1.5 days, 0.25 hours) and rates are typed   │
//! │  freely, so values stay f64 through the whole calculation:              │
//! │                                                                         │
//! │    quantity × rate ──► Σ ──► subtotal ──► × rate/100 ──► tax            │
//! │                                                                         │
//! │  Rounding happens ONCE, when the amount is formatted for display:       │
//! │    74600.0 ──► "74,600.00"                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Format
//! Fixed en-US convention: two fraction digits, `,` between thousands,
//! `.` before the fraction, leading `-` for negative values. No currency
//! symbol; the document places the symbol in its own column.
//!
//! Cents are rounded half away from zero on the shortest decimal form of
//! the value, so `2.675` shows as `2.68` even though the nearest double is
//! slightly below it. Quantities round the exact binary value instead.
//! Non-finite values (an overflowing `quantity × rate`) count as zero.
//!
//! ## Usage
//! ```rust
//! use quote_core::money::Amount;
//!
//! let rate = Amount::new(11350.0);
//! let line_total = rate * 4.0;
//! assert_eq!(line_total.to_string(), "45,400.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;
use ts_rs::TS;

// =============================================================================
// Amount Type
// =============================================================================

/// An unrounded monetary amount.
///
/// ## Design Decisions
/// - **f64**: matches the free-form decimal inputs of the editor
/// - **Newtype serde**: serializes as a bare number
/// - **Display = document format**: `format!("{}", amount)` is what gets printed
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount(f64);

impl Amount {
    /// Wraps a raw value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Returns the raw, unrounded value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Replaces an infinite or NaN value with zero.
    #[inline]
    pub fn finite_or_zero(self) -> Amount {
        if self.0.is_finite() {
            self
        } else {
            Amount::zero()
        }
    }

    /// Applies a percentage rate (`20.0` means 20%).
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Amount;
    ///
    /// let subtotal = Amount::new(74600.0);
    /// assert_eq!(subtotal.percent(20.0).value(), 14920.0);
    /// ```
    #[inline]
    pub fn percent(&self, rate: f64) -> Amount {
        Amount(self.0 * (rate / 100.0))
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a number with two fraction digits and thousands separators.
///
/// Values that round to zero print as `0.00`, never `-0.00`. Non-finite
/// values print as `0.00`.
///
/// ## Example
/// ```rust
/// use quote_core::money::format_amount;
///
/// assert_eq!(format_amount(89520.0), "89,520.00");
/// assert_eq!(format_amount(-1234.5), "-1,234.50");
/// assert_eq!(format_amount(1.125), "1.13");
/// assert_eq!(format_amount(0.004), "0.00");
/// ```
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }

    let fixed = match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => format!("{:.2}", round_cents(decimal).abs()),
        Err(_) => format!("{:.2}", value.abs()),
    };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Formats a number with two fraction digits and no grouping.
///
/// Used for quantities on the document (`1.00`, `4.00`). Rounds the exact
/// binary value half away from zero, so `0.125` gives `0.13` while `2.675`
/// (stored just below) gives `2.67`.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }

    let fixed = match Decimal::from_f64_retain(value) {
        Some(decimal) => format!("{:.2}", round_cents(decimal)),
        None => format!("{:.2}", value),
    };
    match fixed.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => fixed,
    }
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the document format (`74,600.00`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<f64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, qty: f64) -> Self {
        Amount(self.0 * qty)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| acc + x)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
