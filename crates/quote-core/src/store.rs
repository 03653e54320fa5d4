//! # Quote State Store
//!
//! Field-level and line-item update operations over [`QuoteState`].
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  View Action              Operation              Recalculates?          │
//! │  ───────────              ─────────              ─────────────          │
//! │                                                                         │
//! │  Edit any form field ───► update_field()  ─────► only tax.tax_rate     │
//! │                                                                         │
//! │  Edit totals by hand ───► update_field()  ─────► never (override)      │
//! │                                                                         │
//! │  Click "Add Line Item" ─► add_line_item() ─────► yes                   │
//! │                                                                         │
//! │  Click trash icon ──────► remove_line_item() ──► yes (if in range)     │
//! │                                                                         │
//! │  Edit item cell ────────► update_line_item() ──► yes (if in range)     │
//! │                                                                         │
//! │  Click "Calculate" ─────► recalculate_totals() ► yes                   │
//! │                                                                         │
//! │  Upload logo ───────────► set_logo() ──────────► no                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! Every operation borrows the current state and returns the next one. The
//! caller owns the single live state and decides when to swap it in; nothing
//! here holds state between calls. Recalculation is an explicit call inside
//! the operations that need it, never a hidden observer.

use crate::error::CoreResult;
use crate::parse::parse_numeric_field_or_zero;
use crate::totals;
use crate::types::{FieldValue, LineItem, LineItemField, QuoteState, Section};

/// The one field outside line items whose edits change computed totals.
const TAX_RATE_FIELD: &str = "tax_rate";

/// Replaces a single field of a named section.
///
/// ## Rules
/// - `field` must be declared by `section`, and `value` must match its kind
/// - Any text is accepted for text fields (empty, placeholders, non-numeric)
/// - Editing `tax.tax_rate` recalculates totals
/// - Editing `totals.*` is a manual override and does NOT recalculate
///
/// ## Example
/// ```rust
/// use quote_core::store::update_field;
/// use quote_core::{QuoteState, Section};
///
/// let state = QuoteState::default();
/// let next = update_field(&state, Section::Customer, "name", "Jane Roe").unwrap();
/// assert_eq!(next.customer.name, "Jane Roe");
///
/// assert!(update_field(&state, Section::Customer, "shoe_size", "42").is_err());
/// ```
pub fn update_field(
    state: &QuoteState,
    section: Section,
    field: &str,
    value: impl Into<FieldValue>,
) -> CoreResult<QuoteState> {
    let mut next = state.clone();
    next.set_field(section, field, value.into())?;

    if section == Section::Tax && field == TAX_RATE_FIELD {
        next.totals = totals::recalculate(&next.totals, &next.items, &next.tax);
    }

    Ok(next)
}

/// Appends a placeholder line item (`New Item`, 1 × 0, `Service`).
///
/// There is no upper bound on the number of items.
pub fn add_line_item(state: &QuoteState) -> QuoteState {
    let mut next = state.clone();
    next.items.push(LineItem::placeholder());
    with_recalculated_totals(next)
}

/// Removes the line item at `index`, keeping the order of the rest.
///
/// An out-of-range index is a silent no-op: the returned state equals the
/// input, including any manually overridden totals.
///
/// ## Example
/// ```rust
/// use quote_core::store::{add_line_item, remove_line_item};
/// use quote_core::QuoteState;
///
/// let state = add_line_item(&QuoteState::default());
/// assert_eq!(remove_line_item(&state, 5), state);
/// assert!(remove_line_item(&state, 0).items.is_empty());
/// ```
pub fn remove_line_item(state: &QuoteState, index: usize) -> QuoteState {
    if index >= state.items.len() {
        return state.clone();
    }

    let mut next = state.clone();
    next.items.remove(index);
    with_recalculated_totals(next)
}

/// Replaces one column of the line item at `index`.
///
/// Quantity and rate are parsed with
/// [`parse_numeric_field_or_zero`]: unparsable text becomes `0`, not an
/// error and not the previous value. Description and category are stored
/// verbatim. An out-of-range index is a silent no-op.
///
/// ## Example
/// ```rust
/// use quote_core::store::{add_line_item, update_line_item};
/// use quote_core::{LineItemField, QuoteState};
///
/// let state = add_line_item(&QuoteState::default());
/// let next = update_line_item(&state, 0, LineItemField::Rate, "250");
/// assert_eq!(next.items[0].rate, 250.0);
///
/// let next = update_line_item(&next, 0, LineItemField::Rate, "two fifty");
/// assert_eq!(next.items[0].rate, 0.0);
/// ```
pub fn update_line_item(
    state: &QuoteState,
    index: usize,
    field: LineItemField,
    value: &str,
) -> QuoteState {
    if index >= state.items.len() {
        return state.clone();
    }

    let mut next = state.clone();
    let item = &mut next.items[index];
    match field {
        LineItemField::Description => item.description = value.to_string(),
        LineItemField::Category => item.category = value.to_string(),
        LineItemField::Quantity => item.quantity = parse_numeric_field_or_zero(value),
        LineItemField::Rate => item.rate = parse_numeric_field_or_zero(value),
    }

    with_recalculated_totals(next)
}

/// Re-derives totals from the current items and tax rate, discarding any
/// manual override except the discount.
pub fn recalculate_totals(state: &QuoteState) -> QuoteState {
    with_recalculated_totals(state.clone())
}

/// Stores uploaded logo data verbatim. No format or size checks.
pub fn set_logo(state: &QuoteState, data: impl Into<String>) -> QuoteState {
    let mut next = state.clone();
    next.branding.logo = data.into();
    next
}

fn with_recalculated_totals(mut state: QuoteState) -> QuoteState {
    state.totals = totals::recalculate(&state.totals, &state.items, &state.tax);
    state
}

// =============================================================================
// Unit Tests
// =============================================================================
