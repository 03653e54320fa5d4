//! # Quote Desk Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote Desk                                       │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Browser View                                │  │
//! │  │  • Form sections        • Line item table                        │  │
//! │  │  • Totals block         • Live preview / print                   │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │ commands                              │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Host (this crate)                             │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run(), maps failure to exit status          │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► CLI, logging, config, session, print / serve     │  │
//! │  │                                                                  │  │
//! │  │  ipc.rs ─────► JSON lines in, command replies out               │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► update_field, add_line_item, print_document      │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► QuoteSession, DeskConfig                          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match quote_desk_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("quote-desk: {}", e);
            ExitCode::FAILURE
        }
    }
}
