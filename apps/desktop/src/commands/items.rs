//! # Line Item Commands
//!
//! Add, remove and edit rows of the line-item table.
//!
//! Every change recalculates totals. Indices come from the view as signed
//! integers; anything negative or past the end is ignored without touching
//! the session, so manually overridden totals survive a stale click.

use quote_core::store;
use quote_core::LineItemField;
use tracing::debug;

use super::quote::QuoteResponse;
use crate::error::ApiError;
use crate::state::QuoteSession;

/// Appends a `New Item` row (1 × 0, `Service`).
pub fn add_line_item(session: &mut QuoteSession) -> QuoteResponse {
    debug!("add_line_item command");

    let next = store::add_line_item(session.quote());
    session.replace(next);

    QuoteResponse::from(&*session)
}

/// Removes the row at `index`.
pub fn remove_line_item(session: &mut QuoteSession, index: i64) -> QuoteResponse {
    debug!(index = index, "remove_line_item command");

    if let Some(index) = item_index(session, index) {
        let next = store::remove_line_item(session.quote(), index);
        session.replace(next);
    }

    QuoteResponse::from(&*session)
}

/// Replaces one column of the row at `index`.
///
/// ## Arguments
/// * `field` - `description`, `quantity`, `category` or `rate`
/// * `value` - Raw input text; numeric columns turn unparsable text into 0
///
/// ## Errors
/// Unknown column names only. Bad numbers and bad indices are not errors.
pub fn update_line_item(
    session: &mut QuoteSession,
    index: i64,
    field: &str,
    value: &str,
) -> Result<QuoteResponse, ApiError> {
    debug!(index = index, field = %field, "update_line_item command");

    let field: LineItemField = field.parse()?;
    if let Some(index) = item_index(session, index) {
        let next = store::update_line_item(session.quote(), index, field, value);
        session.replace(next);
    }

    Ok(QuoteResponse::from(&*session))
}

fn item_index(session: &QuoteSession, index: i64) -> Option<usize> {
    let resolved = usize::try_from(index)
        .ok()
        .filter(|i| *i < session.quote().items.len());

    if resolved.is_none() {
        debug!(
            index = index,
            len = session.quote().items.len(),
            "ignoring out of range line item index"
        );
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::quote::update_field;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use quote_core::QuoteState;

    fn session() -> QuoteSession {
        QuoteSession::new(QuoteState::sample(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        ))
    }

    #[test]
    fn test_add_line_item() {
        let mut session = session();
        let response = add_line_item(&mut session);

        assert_eq!(response.quote.items.len(), 4);
        assert_eq!(response.quote.items[3].description, "New Item");
        assert_eq!(response.quote.totals.subtotal, "74,600.00");
    }

    #[test]
    fn test_remove_line_item() {
        let mut session = session();
        let response = remove_line_item(&mut session, 0);

        assert_eq!(response.quote.items.len(), 2);
        assert_eq!(response.quote.items[0].description, "Recruitment for Sales position");
        assert_eq!(response.quote.totals.subtotal, "56,750.00");
    }

    #[test]
    fn test_bad_index_keeps_override() {
        let mut session = session();
        update_field(&mut session, "totals", "total", "1.00".into()).unwrap();
        let revision = session.revision();

        let response = remove_line_item(&mut session, -1);
        assert_eq!(response.quote.items.len(), 3);
        assert_eq!(response.quote.totals.total, "1.00");

        let response = update_line_item(&mut session, 3, "rate", "5").unwrap();
        assert_eq!(response.quote.totals.total, "1.00");
        assert_eq!(response.revision, revision);
    }

    #[test]
    fn test_update_rate_recalculates() {
        let mut session = session();
        let response = update_line_item(&mut session, 1, "quantity", "2").unwrap();

        assert_eq!(response.quote.items[1].quantity, 2.0);
        assert_eq!(response.quote.totals.subtotal, "51,900.00");
        assert_eq!(response.quote.totals.tax_amount, "10,380.00");
        assert_eq!(response.quote.totals.total, "62,280.00");
    }

    #[test]
    fn test_non_numeric_becomes_zero() {
        let mut session = session();
        let response = update_line_item(&mut session, 0, "rate", "abc").unwrap();

        assert_eq!(response.quote.items[0].rate, 0.0);
        assert_eq!(response.quote.totals.subtotal, "56,750.00");
    }

    #[test]
    fn test_unknown_column() {
        let mut session = session();
        let err = update_line_item(&mut session, 0, "price", "5").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(session.revision(), 0);
    }
}
