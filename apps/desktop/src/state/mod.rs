//! # State Module
//!
//! Manages host state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────────┐                              │
//! │          ▼                              ▼                               │
//! │  ┌──────────────────────┐      ┌──────────────────┐                    │
//! │  │    QuoteSession      │      │   DeskConfig     │                    │
//! │  │                      │      │                  │                    │
//! │  │  one QuoteState      │      │  tax defaults    │                    │
//! │  │  revision counter    │      │  output format   │                    │
//! │  └──────────────────────┘      └──────────────────┘                    │
//! │                                                                         │
//! │  • QuoteSession: replaced wholesale on every edit, passed as &mut       │
//! │  • DeskConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{DeskConfig, OutputFormat};
pub use session::QuoteSession;
