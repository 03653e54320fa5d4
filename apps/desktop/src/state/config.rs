//! # Configuration State
//!
//! Stores host configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`QUOTE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::fmt;
use std::str::FromStr;

use quote_core::render::MIN_TEXT_WIDTH;
use quote_core::{ValidationError, DEFAULT_TAX_RATE};
use serde::{Deserialize, Serialize};

/// Host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskConfig {
    /// Tax label a new session starts with ("VAT", "GST", "Sales Tax").
    pub tax_label: String,

    /// Tax rate a new session starts with, percent as text.
    pub tax_rate: String,

    /// Currency symbol shown next to amounts.
    pub currency_symbol: String,

    /// Company name a new session starts with.
    pub company_name: String,

    /// Format of the print/export hand-off.
    pub output: OutputFormat,

    /// Column width of plain-text output.
    pub print_width: usize,
}

/// Print/export format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Monospace text layout
    #[default]
    Text,

    /// Document snapshot as JSON, for an external renderer
    Json,
}

impl OutputFormat {
    const NAMES: [&'static str; 2] = ["text", "json"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ValidationError::NotAllowed {
                field: "output".to_string(),
                allowed: OutputFormat::NAMES.iter().map(|n| n.to_string()).collect(),
            }),
        }
    }
}

impl Default for DeskConfig {
    /// ## Default Values
    /// - Tax: VAT 20.00%
    /// - Currency: $
    /// - Company: "afriwork"
    /// - Output: text, 80 columns
    fn default() -> Self {
        DeskConfig {
            tax_label: "VAT".to_string(),
            tax_rate: DEFAULT_TAX_RATE.to_string(),
            currency_symbol: "$".to_string(),
            company_name: "afriwork".to_string(),
            output: OutputFormat::Text,
            print_width: 80,
        }
    }
}

impl DeskConfig {
    /// Creates a DeskConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `QUOTE_TAX_LABEL`: Override tax label
    /// - `QUOTE_TAX_RATE`: Override tax rate (e.g., "17.5")
    /// - `QUOTE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `QUOTE_COMPANY_NAME`: Override company name
    /// - `QUOTE_OUTPUT`: `text` or `json`
    /// - `QUOTE_PRINT_WIDTH`: text width in columns
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DeskConfig::from_env`] with an arbitrary variable source.
    ///
    /// Unparsable `QUOTE_OUTPUT` / `QUOTE_PRINT_WIDTH` values are logged and
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DeskConfig::default();

        if let Some(label) = lookup("QUOTE_TAX_LABEL") {
            config.tax_label = label;
        }

        if let Some(rate) = lookup("QUOTE_TAX_RATE") {
            config.tax_rate = rate;
        }

        if let Some(symbol) = lookup("QUOTE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(name) = lookup("QUOTE_COMPANY_NAME") {
            config.company_name = name;
        }

        if let Some(output) = lookup("QUOTE_OUTPUT") {
            match output.parse::<OutputFormat>() {
                Ok(format) => config.output = format,
                Err(e) => tracing::warn!(value = %output, "ignoring QUOTE_OUTPUT: {}", e),
            }
        }

        if let Some(width) = lookup("QUOTE_PRINT_WIDTH") {
            match width.trim().parse::<usize>() {
                Ok(w) => config.print_width = w.max(MIN_TEXT_WIDTH),
                Err(e) => tracing::warn!(value = %width, "ignoring QUOTE_PRINT_WIDTH: {}", e),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DeskConfig::default();
        assert_eq!(config.tax_label, "VAT");
        assert_eq!(config.tax_rate, "20.00");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.print_width, 80);
    }

    #[test]
    fn test_overrides() {
        let config = DeskConfig::from_lookup(lookup_from(&[
            ("QUOTE_TAX_LABEL", "Sales Tax"),
            ("QUOTE_TAX_RATE", "8.25"),
            ("QUOTE_CURRENCY_SYMBOL", "£"),
            ("QUOTE_COMPANY_NAME", "Acme"),
            ("QUOTE_OUTPUT", "JSON"),
            ("QUOTE_PRINT_WIDTH", "100"),
        ]));

        assert_eq!(config.tax_label, "Sales Tax");
        assert_eq!(config.tax_rate, "8.25");
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.print_width, 100);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = DeskConfig::from_lookup(lookup_from(&[
            ("QUOTE_OUTPUT", "pdf"),
            ("QUOTE_PRINT_WIDTH", "wide"),
        ]));
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.print_width, 80);
    }

    #[test]
    fn test_print_width_is_clamped() {
        let config = DeskConfig::from_lookup(lookup_from(&[("QUOTE_PRINT_WIDTH", "20")]));
        assert_eq!(config.print_width, MIN_TEXT_WIDTH);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" Json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }
}
