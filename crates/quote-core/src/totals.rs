//! # Totals Calculator
//!
//! Derives subtotal, tax and total from the line items and the tax rate.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► Σ quantity × rate ──────────────────────► subtotal           │
//! │                                  │                                      │
//! │  tax.tax_rate ("20.00")          │                                      │
//! │       │ parse_numeric_field_or_zero                                     │
//! │       ▼                          ▼                                      │
//! │     20.0 ──────────────► subtotal × 20 / 100 ──────► tax_amount         │
//! │                                                                         │
//! │                          subtotal + tax_amount ────► total              │
//! │                                                                         │
//! │  discount: NEVER touched (manual-only field)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator runs automatically after every line-item or tax-rate edit
//! and on explicit request after a manual override. Both paths call
//! [`recalculate`], so two runs over the same inputs produce identical text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Amount;
use crate::parse::parse_numeric_field_or_zero;
use crate::types::{LineItem, TaxSettings, Totals};

/// Unformatted calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsBreakdown {
    pub subtotal: Amount,
    /// Parsed tax rate in percent (`20.0` = 20%).
    pub tax_rate: f64,
    pub tax_amount: Amount,
    pub total: Amount,
}

/// Computes the raw totals.
///
/// An invalid or empty `tax_rate` counts as 0%. Negative quantities, rates
/// and tax rates are not clamped. A sum or product that overflows to
/// infinity counts as 0, like unparsable input.
///
/// ## Example
/// ```rust
/// use quote_core::totals::calculate;
/// use quote_core::LineItem;
///
/// let items = vec![
///     LineItem::new("Accountant", 1.0, "Intermediate", 17850.0),
///     LineItem::new("Sales", 4.0, "Junior", 11350.0),
///     LineItem::new("Cashier", 1.0, "Junior", 11350.0),
/// ];
///
/// let breakdown = calculate(&items, "20.00");
/// assert_eq!(breakdown.subtotal.value(), 74600.0);
/// assert_eq!(breakdown.tax_amount.value(), 14920.0);
/// assert_eq!(breakdown.total.value(), 89520.0);
/// ```
pub fn calculate(items: &[LineItem], tax_rate: &str) -> TotalsBreakdown {
    let subtotal = items.iter().map(LineItem::line_total).sum::<Amount>().finite_or_zero();
    let rate = parse_numeric_field_or_zero(tax_rate);
    let tax_amount = subtotal.percent(rate).finite_or_zero();

    TotalsBreakdown {
        subtotal,
        tax_rate: rate,
        tax_amount,
        total: (subtotal + tax_amount).finite_or_zero(),
    }
}

/// Produces the next [`Totals`] block from the current one.
///
/// `subtotal`, `tax_amount` and `total` are formatted for display;
/// `tax_rate` is copied verbatim from the tax settings so the document
/// shows exactly what the user typed; `discount` is carried over unchanged.
///
/// ## Example
/// ```rust
/// use quote_core::totals::recalculate;
/// use quote_core::{TaxSettings, Totals};
///
/// let current = Totals { discount: "-".into(), ..Totals::default() };
/// let tax = TaxSettings { tax_rate: "0".into(), ..TaxSettings::default() };
///
/// let next = recalculate(&current, &[], &tax);
/// assert_eq!(next.subtotal, "0.00");
/// assert_eq!(next.total, "0.00");
/// assert_eq!(next.discount, "-");
/// ```
pub fn recalculate(current: &Totals, items: &[LineItem], tax: &TaxSettings) -> Totals {
    let breakdown = calculate(items, &tax.tax_rate);

    Totals {
        subtotal: breakdown.subtotal.to_string(),
        discount: current.discount.clone(),
        tax_rate: tax.tax_rate.clone(),
        tax_amount: breakdown.tax_amount.to_string(),
        total: breakdown.total.to_string(),
    }
}

/// Whether `totals` differ from what the calculator would produce, i.e. the
/// user has overridden at least one computed field.
pub fn is_overridden(totals: &Totals, items: &[LineItem], tax: &TaxSettings) -> bool {
    recalculate(totals, items, tax) != *totals
}

// =============================================================================
// Unit Tests
// =============================================================================
