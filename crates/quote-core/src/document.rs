//! # Quote Document
//!
//! Projects a [`QuoteState`] into exactly what the printed quote shows.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [logo] company name                                          Quote     │
//! │                                              Date         October 18..  │
//! │                                              Valid Until  [Date]        │
//! │                                              Quote #      [100]         │
//! │                                              Customer ID  [ABC12345]    │
//! │                                                                         │
//! │  Customer:                     Quote/Project Description                │
//! │  name, company, address..      free text                                │
//! │                                                                         │
//! │  Description      Quantity   Category     Rate         Line Total       │
//! │  ─────────────────────────────────────────────────────────────────      │
//! │  rows...  + filler rows up to 12                                        │
//! │                                                                         │
//! │                                        Subtotal     $   74,600.00       │
//! │                                        Discount     $   -               │
//! │                                        VAT Rate     %   20.00           │
//! │                                        VAT          $   14,920.00       │
//! │                                        Total        $   89,520.00       │
//! │                                                                         │
//! │  acceptance prompt + Signature / Print Name / Date                      │
//! │  footer: thanks, enquiry contact, address line, contact line            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Renderers (the browser view, [`crate::render`]) consume this snapshot so
//! every output agrees on derived text such as line totals and footer lines.
//! Totals rows show the stored [`crate::Totals`] text verbatim, so manual
//! overrides are printed as entered.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{format_amount, format_quantity};
use crate::types::{LineItem, QuoteState};
use crate::TABLE_MIN_ROWS;

/// Document title printed in the header.
pub const DOCUMENT_TITLE: &str = "Quote";

/// Column headings of the line-item table.
pub const ITEM_COLUMNS: [&str; 5] = ["Description", "Quantity", "Category", "Rate", "Line Total"];

const CUSTOMER_HEADING: &str = "Customer:";
const DESCRIPTION_HEADING: &str = "Quote/Project Description";
const ACCEPTANCE_PROMPT: &str =
    "Please confirm your acceptance of this quote by signing this document";
const ACCEPTANCE_SLOTS: [&str; 3] = ["Signature", "Print Name", "Date"];
const FOOTER_GREETING: &str = "Thank you for your business!";
const FALLBACK_TAX_LABEL: &str = "Tax";

/// A label/value pair in the header meta table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetaRow {
    pub label: String,
    pub value: String,
}

/// One printed line item with every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentRow {
    pub description: String,
    /// Two fraction digits, no grouping (`4.00`).
    pub quantity: String,
    pub category: String,
    /// Grouped amount (`11,350.00`).
    pub rate: String,
    /// Grouped amount of quantity × rate.
    pub line_total: String,
}

impl From<&LineItem> for DocumentRow {
    fn from(item: &LineItem) -> Self {
        DocumentRow {
            description: item.description.clone(),
            quantity: format_quantity(item.quantity),
            category: item.category.clone(),
            rate: format_amount(item.rate),
            line_total: item.line_total().to_string(),
        }
    }
}

/// One row of the totals block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsRow {
    pub label: String,
    /// Currency symbol, or `%` for the rate row.
    pub unit: String,
    pub value: String,
}

/// Signature block at the bottom of the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcceptanceBlock {
    pub prompt: String,
    /// Captions under the blank lines.
    pub slots: Vec<String>,
}

/// Footer lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentFooter {
    pub greeting: String,
    pub enquiry: String,
    pub address_line: String,
    pub contact_line: String,
}

/// Render-ready snapshot of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteDocument {
    pub title: String,
    /// Opaque image data; `None` when no logo is set.
    pub logo: Option<String>,
    /// `None` when the name is hidden or empty.
    pub company_name: Option<String>,
    pub meta: Vec<MetaRow>,
    pub customer_heading: String,
    pub customer_lines: Vec<String>,
    pub description_heading: String,
    pub description: String,
    pub terms: String,
    pub columns: Vec<String>,
    pub rows: Vec<DocumentRow>,
    /// Blank rows that pad the table to a fixed height.
    pub filler_rows: usize,
    pub currency_symbol: String,
    pub totals: Vec<TotalsRow>,
    pub acceptance: AcceptanceBlock,
    pub footer: DocumentFooter,
}

impl QuoteDocument {
    /// Builds the document for the given state.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::document::QuoteDocument;
    /// use quote_core::store::add_line_item;
    /// use quote_core::QuoteState;
    ///
    /// let state = add_line_item(&QuoteState::default());
    /// let doc = QuoteDocument::from_state(&state);
    ///
    /// assert_eq!(doc.rows.len(), 1);
    /// assert_eq!(doc.rows[0].quantity, "1.00");
    /// assert_eq!(doc.filler_rows, 11);
    /// ```
    pub fn from_state(state: &QuoteState) -> Self {
        let tax_label = match state.tax.tax_label.trim() {
            "" => FALLBACK_TAX_LABEL,
            label => label,
        };
        let currency = state.tax.currency_symbol.clone();

        let company_name = Some(&state.branding.company_name)
            .filter(|name| state.branding.company_name_enabled && !name.trim().is_empty())
            .cloned();

        let logo = Some(&state.branding.logo)
            .filter(|logo| !logo.is_empty())
            .cloned();

        QuoteDocument {
            title: DOCUMENT_TITLE.to_string(),
            logo,
            company_name,
            meta: vec![
                meta_row("Date", &state.quote.date),
                meta_row("Valid Until", &state.quote.valid_until),
                meta_row("Quote #", &state.quote.quote_number),
                meta_row("Customer ID", &state.customer.customer_id),
            ],
            customer_heading: CUSTOMER_HEADING.to_string(),
            customer_lines: vec![
                state.customer.name.clone(),
                state.customer.company_name.clone(),
                state.customer.address.clone(),
                state.customer.city_state_zip.clone(),
                state.customer.phone.clone(),
            ],
            description_heading: DESCRIPTION_HEADING.to_string(),
            description: state.quote.description.clone(),
            terms: state.quote.terms.clone(),
            columns: ITEM_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: state.items.iter().map(DocumentRow::from).collect(),
            filler_rows: TABLE_MIN_ROWS.saturating_sub(state.items.len()),
            totals: vec![
                totals_row("Subtotal", &currency, &state.totals.subtotal),
                totals_row("Discount", &currency, &state.totals.discount),
                totals_row(&format!("{} Rate", tax_label), "%", &state.totals.tax_rate),
                totals_row(tax_label, &currency, &state.totals.tax_amount),
                totals_row("Total", &currency, &state.totals.total),
            ],
            currency_symbol: currency,
            acceptance: AcceptanceBlock {
                prompt: ACCEPTANCE_PROMPT.to_string(),
                slots: ACCEPTANCE_SLOTS.iter().map(|s| s.to_string()).collect(),
            },
            footer: DocumentFooter {
                greeting: FOOTER_GREETING.to_string(),
                enquiry: format!(
                    "Should you have any enquiries concerning this quote, please contact {} on {}",
                    state.person.name, state.person.tel
                ),
                address_line: format!(
                    "{} {}, {}, {}, {}, {}",
                    state.address.building_number,
                    state.address.street,
                    state.address.town_city,
                    state.address.county,
                    state.address.state,
                    state.address.zip_code
                ),
                contact_line: format!(
                    "Tel: {} Fax: {} E-mail: {} Web: {}",
                    state.contact.tel, state.contact.fax, state.contact.email, state.contact.website
                ),
            },
        }
    }
}

impl From<&QuoteState> for QuoteDocument {
    fn from(state: &QuoteState) -> Self {
        QuoteDocument::from_state(state)
    }
}

fn meta_row(label: &str, value: &str) -> MetaRow {
    MetaRow {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn totals_row(label: &str, unit: &str, value: &str) -> TotalsRow {
    TotalsRow {
        label: label.to_string(),
        unit: unit.to_string(),
        value: value.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
