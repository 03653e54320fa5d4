//! # Quote Commands
//!
//! Whole-quote reads and named field edits.
//!
//! ## Field Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View input changes                                                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  update_field('tax', 'tax_rate', '17.5')                                │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Parse section name (unknown → UNKNOWN_SECTION)             │    │
//! │  │  2. store::update_field (unknown field → UNKNOWN_FIELD)        │    │
//! │  │  3. tax.tax_rate only: totals recalculated by the store        │    │
//! │  │  4. Replace session state, return snapshot                     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Preview re-renders from the returned snapshot                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use quote_core::{store, totals};
use quote_core::{FieldValue, QuoteState, Section, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::QuoteSession;

/// Snapshot returned by every editing command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub revision: u64,
    /// True while the totals block differs from what the items give.
    pub totals_overridden: bool,
    pub quote: QuoteState,
}

impl From<&QuoteSession> for QuoteResponse {
    fn from(session: &QuoteSession) -> Self {
        let quote = session.quote();
        QuoteResponse {
            revision: session.revision(),
            totals_overridden: totals::is_overridden(&quote.totals, &quote.items, &quote.tax),
            quote: quote.clone(),
        }
    }
}

/// Gets the current quote.
pub fn get_quote(session: &QuoteSession) -> QuoteResponse {
    debug!("get_quote command");
    QuoteResponse::from(session)
}

/// Reads one field of one section.
///
/// ## Errors
/// `UNKNOWN_SECTION` or `UNKNOWN_FIELD` for names the form does not have.
pub fn get_field(
    session: &QuoteSession,
    section: &str,
    field: &str,
) -> Result<FieldValue, ApiError> {
    debug!(section = %section, field = %field, "get_field command");

    let section: Section = section.parse()?;
    session.quote().field(section, field).ok_or_else(|| {
        ApiError::from(ValidationError::UnknownField {
            section: section.to_string(),
            field: field.to_string(),
        })
    })
}

/// Replaces one field of one section.
///
/// ## Arguments
/// * `section` - Section name (`branding`, `address`, ..., `totals`)
/// * `field` - Field name within the section (`company_name`, `tax_rate`, ...)
/// * `value` - Text, or a flag for `branding.company_name_enabled`
///
/// ## Returns
/// Updated quote. On error the session is unchanged.
pub fn update_field(
    session: &mut QuoteSession,
    section: &str,
    field: &str,
    value: FieldValue,
) -> Result<QuoteResponse, ApiError> {
    debug!(section = %section, field = %field, "update_field command");

    let section: Section = section.parse()?;
    let next = store::update_field(session.quote(), section, field, value)?;
    session.replace(next);

    Ok(QuoteResponse::from(&*session))
}

/// Stores uploaded logo data (typically a data URL) verbatim.
pub fn set_logo(session: &mut QuoteSession, data: String) -> QuoteResponse {
    debug!(bytes = data.len(), "set_logo command");

    let next = store::set_logo(session.quote(), data);
    session.replace(next);

    QuoteResponse::from(&*session)
}
