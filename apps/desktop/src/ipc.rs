//! # Command Loop
//!
//! Line-delimited JSON transport between the view and the commands.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin (one request per line)                                           │
//! │    {"command":"update_field","section":"tax","field":"tax_rate",        │
//! │     "value":"17.5"}                                                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  dispatch() ──► commands::* with the shared &mut QuoteSession           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  stdout (one reply per line)                                            │
//! │    {"status":"ok","data":{"revision":1,"totalsOverridden":false,...}}   │
//! │    {"status":"error","error":{"code":"UNKNOWN_FIELD","message":"..."}}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blank lines are skipped. A line that is not a known command gets an
//! `INVALID_COMMAND` reply and the loop keeps going.

use std::io::{self, BufRead, Write};

use quote_core::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::commands::{items, print, quote, totals};
use crate::error::{ApiError, ErrorCode};
use crate::state::{DeskConfig, QuoteSession};

/// One request from the view, tagged by command name.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandRequest {
    GetQuote,
    GetField {
        section: String,
        field: String,
    },
    UpdateField {
        section: String,
        field: String,
        value: FieldValue,
    },
    SetLogo {
        data: String,
    },
    AddLineItem,
    RemoveLineItem {
        index: i64,
    },
    UpdateLineItem {
        index: i64,
        field: String,
        value: String,
    },
    RecalculateTotals,
    GetDocument,
    /// Format and width fall back to the configured ones.
    PrintDocument {
        #[serde(default)]
        format: Option<String>,
        #[serde(default)]
        width: Option<usize>,
    },
}

impl CommandRequest {
    /// Wire name of the command, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            CommandRequest::GetQuote => "get_quote",
            CommandRequest::GetField { .. } => "get_field",
            CommandRequest::UpdateField { .. } => "update_field",
            CommandRequest::SetLogo { .. } => "set_logo",
            CommandRequest::AddLineItem => "add_line_item",
            CommandRequest::RemoveLineItem { .. } => "remove_line_item",
            CommandRequest::UpdateLineItem { .. } => "update_line_item",
            CommandRequest::RecalculateTotals => "recalculate_totals",
            CommandRequest::GetDocument => "get_document",
            CommandRequest::PrintDocument { .. } => "print_document",
        }
    }
}

/// One reply line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CommandReply {
    Ok { data: Value },
    Error { error: ApiError },
}

impl From<Result<Value, ApiError>> for CommandReply {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => CommandReply::Ok { data },
            Err(error) => CommandReply::Error { error },
        }
    }
}

/// Runs one request against the session.
///
/// Editing commands reply with a [`quote::QuoteResponse`]; `get_field` with
/// the bare field value, `get_document` with the document and
/// `print_document` with the rendered string.
pub fn dispatch(
    session: &mut QuoteSession,
    config: &DeskConfig,
    request: CommandRequest,
) -> Result<Value, ApiError> {
    let data = match request {
        CommandRequest::GetQuote => serde_json::to_value(quote::get_quote(session))?,
        CommandRequest::GetField { section, field } => {
            serde_json::to_value(quote::get_field(session, &section, &field)?)?
        }
        CommandRequest::UpdateField {
            section,
            field,
            value,
        } => serde_json::to_value(quote::update_field(session, &section, &field, value)?)?,
        CommandRequest::SetLogo { data } => serde_json::to_value(quote::set_logo(session, data))?,
        CommandRequest::AddLineItem => serde_json::to_value(items::add_line_item(session))?,
        CommandRequest::RemoveLineItem { index } => {
            serde_json::to_value(items::remove_line_item(session, index))?
        }
        CommandRequest::UpdateLineItem {
            index,
            field,
            value,
        } => serde_json::to_value(items::update_line_item(session, index, &field, &value)?)?,
        CommandRequest::RecalculateTotals => {
            serde_json::to_value(totals::recalculate_totals(session))?
        }
        CommandRequest::GetDocument => serde_json::to_value(print::get_document(session))?,
        CommandRequest::PrintDocument { format, width } => {
            let width = width.unwrap_or(config.print_width);
            let output = match format {
                Some(format) => print::print_document(session, &format, width)?,
                None => print::render_document(session, config.output, width)?,
            };
            Value::String(output)
        }
    };
    Ok(data)
}

/// Reads requests from `reader` until end of input, writing one reply per
/// request to `writer`.
///
/// Only transport failures end the loop early.
pub fn serve<R: BufRead, W: Write>(
    session: &mut QuoteSession,
    config: &DeskConfig,
    reader: R,
    mut writer: W,
) -> io::Result<()> {
    info!("Serving commands");

    let mut handled = 0u64;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<CommandRequest>(line) {
            Ok(request) => {
                debug!(command = request.name(), "request received");
                CommandReply::from(dispatch(session, config, request))
            }
            Err(err) => {
                warn!("malformed request: {}", err);
                CommandReply::Error {
                    error: ApiError::new(ErrorCode::InvalidCommand, err.to_string()),
                }
            }
        };

        serde_json::to_writer(&mut writer, &reply)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        handled += 1;
    }

    info!(
        requests = handled,
        revision = session.revision(),
        "Input closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quote_core::QuoteState;
    use std::io::Cursor;

    fn session() -> QuoteSession {
        QuoteSession::new(QuoteState::sample(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        ))
    }

    /// Feeds `input` through the loop and parses every reply line.
    fn run_lines(session: &mut QuoteSession, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        serve(session, &DeskConfig::default(), Cursor::new(input), &mut output).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_editing_session() {
        let mut session = session();
        let input = [
            r#"{"command":"update_field","section":"customer","field":"name","value":"Jane Roe"}"#,
            r#"{"command":"add_line_item"}"#,
            r#"{"command":"update_line_item","index":3,"field":"rate","value":"100"}"#,
            r#"{"command":"update_field","section":"totals","field":"total","value":"1.00"}"#,
            r#"{"command":"recalculate_totals"}"#,
            r#"{"command":"remove_line_item","index":3}"#,
            r#"{"command":"get_field","section":"customer","field":"name"}"#,
        ]
        .join("\n");

        let replies = run_lines(&mut session, &input);
        assert_eq!(replies.len(), 7);
        assert!(replies.iter().all(|r| r["status"] == "ok"));

        assert_eq!(replies[0]["data"]["revision"], 1);
        assert_eq!(replies[1]["data"]["quote"]["items"].as_array().unwrap().len(), 4);
        assert_eq!(replies[2]["data"]["quote"]["totals"]["subtotal"], "74,700.00");
        assert_eq!(replies[3]["data"]["totalsOverridden"], true);
        assert_eq!(replies[4]["data"]["totalsOverridden"], false);
        assert_eq!(replies[5]["data"]["quote"]["totals"]["subtotal"], "74,600.00");
        assert_eq!(replies[6]["data"], "Jane Roe");

        assert_eq!(session.revision(), 6);
        assert_eq!(session.quote().customer.name, "Jane Roe");
    }

    #[test]
    fn test_bad_requests_keep_the_loop_alive() {
        let mut session = session();
        let input = "not json\n\
                     \n\
                     {\"command\":\"explode\"}\n\
                     {\"command\":\"update_field\",\"section\":\"customer\",\"field\":\"shoe_size\",\"value\":\"42\"}\n\
                     {\"command\":\"get_quote\"}\n";

        let replies = run_lines(&mut session, input);
        assert_eq!(replies.len(), 4);

        assert_eq!(replies[0]["status"], "error");
        assert_eq!(replies[0]["error"]["code"], "INVALID_COMMAND");
        assert_eq!(replies[1]["error"]["code"], "INVALID_COMMAND");
        assert_eq!(replies[2]["error"]["code"], "UNKNOWN_FIELD");

        assert_eq!(replies[3]["status"], "ok");
        assert_eq!(replies[3]["data"]["revision"], 0);
    }

    #[test]
    fn test_print_uses_configured_defaults() {
        let mut session = session();
        let input = "{\"command\":\"print_document\"}\n\
                     {\"command\":\"print_document\",\"format\":\"json\"}\n\
                     {\"command\":\"print_document\",\"format\":\"pdf\"}\n";

        let replies = run_lines(&mut session, input);

        let text = replies[0]["data"].as_str().unwrap();
        assert!(text.contains("89,520.00"));
        assert!(text.lines().all(|line| line.chars().count() <= 80));

        let json: Value = serde_json::from_str(replies[1]["data"].as_str().unwrap()).unwrap();
        assert_eq!(json["title"], "Quote");

        assert_eq!(replies[2]["error"]["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_request_names() {
        let request: CommandRequest =
            serde_json::from_str(r#"{"command":"remove_line_item","index":-1}"#).unwrap();
        assert_eq!(request.name(), "remove_line_item");

        let request: CommandRequest =
            serde_json::from_str(r#"{"command":"print_document","width":120}"#).unwrap();
        assert!(matches!(
            request,
            CommandRequest::PrintDocument { format: None, width: Some(120) }
        ));
    }
}
