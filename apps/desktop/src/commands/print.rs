//! # Print Commands
//!
//! Produces the print/export hand-off from the current quote.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QuoteState ──► QuoteDocument ──┬──► render_plain_text ──► text        │
//! │                                 │                                       │
//! │                                 └──► serde_json ──────────► JSON        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use quote_core::render::render_plain_text;
use quote_core::QuoteDocument;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{OutputFormat, QuoteSession};

/// Gets the render-ready document for the live preview.
pub fn get_document(session: &QuoteSession) -> QuoteDocument {
    debug!("get_document command");
    QuoteDocument::from(session.quote())
}

/// Renders the current quote in the named format (`text` or `json`).
///
/// `width` only applies to text output.
pub fn print_document(
    session: &QuoteSession,
    format: &str,
    width: usize,
) -> Result<String, ApiError> {
    debug!(format = %format, width = width, "print_document command");

    let format: OutputFormat = format.parse()?;
    render_document(session, format, width)
}

/// Renders the current quote in an already-parsed format.
pub fn render_document(
    session: &QuoteSession,
    format: OutputFormat,
    width: usize,
) -> Result<String, ApiError> {
    let document = QuoteDocument::from(session.quote());

    match format {
        OutputFormat::Text => Ok(render_plain_text(&document, width)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use quote_core::QuoteState;

    fn session() -> QuoteSession {
        QuoteSession::new(QuoteState::sample(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        ))
    }

    #[test]
    fn test_get_document() {
        let doc = get_document(&session());
        assert_eq!(doc.rows.len(), 3);
        assert_eq!(doc.filler_rows, 9);
        assert_eq!(doc.company_name.as_deref(), Some("afriwork"));
        assert_eq!(doc.meta[0].value, "October 18, 2026");
    }

    #[test]
    fn test_print_text() {
        let text = print_document(&session(), "text", 80).unwrap();
        assert!(text.contains("afriwork"));
        assert!(text.contains("89,520.00"));
        assert!(text.lines().all(|line| line.chars().count() <= 80));
    }

    #[test]
    fn test_print_json() {
        let json = print_document(&session(), "json", 80).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Quote");
        assert_eq!(value["rows"][1]["line_total"], "45,400.00");
        assert_eq!(value["totals"][4]["value"], "89,520.00");
    }

    #[test]
    fn test_unknown_format() {
        let err = print_document(&session(), "pdf", 80).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("pdf") || err.message.contains("output"));
    }
}
