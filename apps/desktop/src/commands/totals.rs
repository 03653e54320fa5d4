//! # Totals Commands

use quote_core::store;
use tracing::debug;

use super::quote::QuoteResponse;
use crate::state::QuoteSession;

/// Re-derives subtotal, tax and total from the items, discarding manual
/// overrides. The discount text is kept.
pub fn recalculate_totals(session: &mut QuoteSession) -> QuoteResponse {
    debug!("recalculate_totals command");

    let next = store::recalculate_totals(session.quote());
    session.replace(next);

    QuoteResponse::from(&*session)
}
