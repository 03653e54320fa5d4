//! # Session State
//!
//! Owns the one live [`QuoteState`] of an editing session.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Command                  Store (pure)               Session            │
//! │  ───────                  ────────────               ───────            │
//! │                                                                         │
//! │  update_field() ────────► store::update_field(&s) ─► replace(next)     │
//! │                                                                         │
//! │  add_line_item() ───────► store::add_line_item(&s) ► replace(next)     │
//! │                                                                         │
//! │  get_quote() ───────────► (read only) ─────────────► quote()           │
//! │                                                                         │
//! │  The session is passed explicitly (&mut) to every command. There is    │
//! │  no global and no lock: the host processes one event at a time.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use quote_core::store;
use quote_core::{CoreResult, QuoteState, Section};

use super::config::DeskConfig;

/// The editing session.
///
/// `revision` counts state replacements that changed something, so the view
/// can tell whether a snapshot it holds is stale.
#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    quote: QuoteState,
    revision: u64,
}

impl QuoteSession {
    /// Starts a session from an explicit state.
    pub fn new(quote: QuoteState) -> Self {
        QuoteSession { quote, revision: 0 }
    }

    /// Starts a session from the sample quote, adjusted to the configured
    /// tax settings and company name.
    ///
    /// Goes through the store so totals match the configured tax rate.
    pub fn from_config(config: &DeskConfig, today: NaiveDate) -> CoreResult<Self> {
        let quote = QuoteState::sample(today);
        let quote = store::update_field(&quote, Section::Tax, "tax_label", config.tax_label.as_str())?;
        let quote = store::update_field(&quote, Section::Tax, "tax_rate", config.tax_rate.as_str())?;
        let quote = store::update_field(
            &quote,
            Section::Tax,
            "currency_symbol",
            config.currency_symbol.as_str(),
        )?;
        let quote = store::update_field(
            &quote,
            Section::Branding,
            "company_name",
            config.company_name.as_str(),
        )?;

        Ok(QuoteSession::new(quote))
    }

    /// Current snapshot.
    pub fn quote(&self) -> &QuoteState {
        &self.quote
    }

    /// Number of changing replacements so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swaps in the next state. Returns whether anything changed.
    pub fn replace(&mut self, next: QuoteState) -> bool {
        if next == self.quote {
            return false;
        }
        self.quote = next;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_default_config_matches_sample() {
        let session = QuoteSession::from_config(&DeskConfig::default(), today()).unwrap();
        assert_eq!(session.quote(), &QuoteState::sample(today()));
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_config_tax_rate_recalculates() {
        let config = DeskConfig {
            tax_label: "GST".to_string(),
            tax_rate: "10".to_string(),
            currency_symbol: "A$".to_string(),
            ..DeskConfig::default()
        };
        let session = QuoteSession::from_config(&config, today()).unwrap();
        let quote = session.quote();

        assert_eq!(quote.tax.tax_label, "GST");
        assert_eq!(quote.tax.currency_symbol, "A$");
        assert_eq!(quote.totals.tax_rate, "10");
        assert_eq!(quote.totals.tax_amount, "7,460.00");
        assert_eq!(quote.totals.total, "82,060.00");
    }

    #[test]
    fn test_replace_counts_only_changes() {
        let mut session = QuoteSession::new(QuoteState::default());

        assert!(!session.replace(QuoteState::default()));
        assert_eq!(session.revision(), 0);

        let next = store::add_line_item(session.quote());
        assert!(session.replace(next));
        assert_eq!(session.revision(), 1);
        assert_eq!(session.quote().items.len(), 1);
    }
}
