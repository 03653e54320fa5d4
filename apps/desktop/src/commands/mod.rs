//! # Commands Module
//!
//! All commands exposed to the view.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── quote.rs    ◄─── get_quote, get_field, update_field, set_logo
//! ├── items.rs    ◄─── add/remove/update line items
//! ├── totals.rs   ◄─── recalculate_totals
//! └── print.rs    ◄─── get_document, print_document
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View event (input, click)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn update_field(                                                       │
//! │      session: &mut QuoteSession,  ◄── passed explicitly                 │
//! │      section: &str,               ◄── from the event                    │
//! │      field: &str,                                                       │
//! │      value: FieldValue,                                                 │
//! │  ) -> Result<QuoteResponse, ApiError>                                   │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  View re-renders from the full snapshot                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never hold state of their own. Each one borrows the current
//! quote, asks the store for the next one and swaps it into the session.

pub mod items;
pub mod print;
pub mod quote;
pub mod totals;
