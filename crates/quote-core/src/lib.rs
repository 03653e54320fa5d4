//! # quote-core: Pure Business Logic for Quote Desk
//!
//! This crate is the **heart** of Quote Desk. It contains the quote data
//! model, the update operations and the totals calculator as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser View                                 │   │
//! │  │    Form sections ──► Line items ──► Totals ──► Live preview    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Desktop Host (quote-desk)                    │   │
//! │  │    update_field, add_line_item, recalculate_totals, print...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │  totals   │  │ document  │  │   │
//! │  │   │QuoteState │  │  updates  │  │ subtotal  │  │ snapshot  │  │   │
//! │  │   │ LineItem  │  │ line items│  │ tax/total │  │ + text    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Data model (QuoteState, LineItem, Totals, ...) and field addressing
//! - [`store`] - Update operations returning the next state
//! - [`totals`] - Totals calculator
//! - [`money`] - Amount type and display formatting
//! - [`parse`] - Numeric parsing policy with zero fallback
//! - [`document`] - Render-ready document snapshot
//! - [`render`] - Plain-text layout of the document
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation borrows the current state and returns the next
//! 2. **No I/O**: clock, environment, file system and logging live in the host
//! 3. **Permissive Input**: non-numeric input becomes 0, bad indices are no-ops
//! 4. **Explicit Recalculation**: operations that change items or tax rate call the calculator themselves
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::store::{add_line_item, update_field, update_line_item};
//! use quote_core::{LineItemField, QuoteState, Section};
//!
//! let state = QuoteState::default();
//! let state = update_field(&state, Section::Tax, "tax_rate", "20.00").unwrap();
//! let state = add_line_item(&state);
//! let state = update_line_item(&state, 0, LineItemField::Rate, "1500");
//!
//! assert_eq!(state.totals.subtotal, "1,500.00");
//! assert_eq!(state.totals.tax_amount, "300.00");
//! assert_eq!(state.totals.total, "1,800.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod money;
pub mod parse;
pub mod render;
pub mod store;
pub mod totals;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quote_core::QuoteState` instead of
// `use quote_core::types::QuoteState`

pub use document::QuoteDocument;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use parse::parse_numeric_field_or_zero;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax rate a fresh quote starts with (percent, as text).
pub const DEFAULT_TAX_RATE: &str = "20.00";

/// Discount text a fresh quote starts with. The calculator never writes it.
pub const DISCOUNT_PLACEHOLDER: &str = "-";

/// Description of a newly added line item.
pub const NEW_ITEM_DESCRIPTION: &str = "New Item";

/// Category of a newly added line item.
pub const NEW_ITEM_CATEGORY: &str = "Service";

/// Minimum number of table rows on the printed quote (A4 layout).
pub const TABLE_MIN_ROWS: usize = 12;
