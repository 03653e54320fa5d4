//! # Quote Desk Library
//!
//! Host library for the Quote Desk editor. Owns the editing session and
//! exposes the commands the view calls; all business logic lives in
//! `quote-core`.
//!
//! ## Module Organization
//! ```text
//! quote_desk_lib/
//! ├── lib.rs          ◄─── You are here (startup, CLI & run)
//! ├── ipc.rs          ◄─── Line-delimited JSON command loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── The single editing session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quote.rs    ◄─── Field edits, logo
//! │   ├── items.rs    ◄─── Line item edits
//! │   ├── totals.rs   ◄─── Manual recalculation
//! │   └── print.rs    ◄─── Document snapshot, print/export
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::DeskError;
use state::{DeskConfig, OutputFormat, QuoteSession};

#[derive(Debug, Parser)]
#[command(name = "quote-desk", about = "Live quote editor host")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the starting quote (the default)
    Print {
        /// text or json (defaults to QUOTE_OUTPUT)
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Text width in columns (defaults to QUOTE_PRINT_WIDTH)
        #[arg(long)]
        width: Option<usize>,
    },
    /// Answer JSON commands read from stdin, one per line
    Serve,
}

/// Parses the command line and runs the host.
pub fn run() -> Result<(), DeskError> {
    run_cli(Cli::parse())
}

/// Runs the host for an already-parsed command line.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (DEBUG for quote crates), override with RUST_LOG    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then QUOTE_* environment variables                      │
/// │                                                                         │
/// │  3. Build Session ────────────────────────────────────────────────────► │
/// │     • Sample quote dated today                                          │
/// │     • Configured tax settings applied through the store                 │
/// │                                                                         │
/// │  4a. print ───────────────────────────────────────────────────────────► │
/// │     • Text or JSON document on stdout                                   │
/// │                                                                         │
/// │  4b. serve ───────────────────────────────────────────────────────────► │
/// │     • JSON requests on stdin, one reply line each on stdout             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run_cli(cli: Cli) -> Result<(), DeskError> {
    init_tracing();

    info!("Starting Quote Desk");

    let config = DeskConfig::from_env();
    info!(
        tax_label = %config.tax_label,
        tax_rate = %config.tax_rate,
        output = %config.output,
        "Configuration loaded"
    );

    let today = chrono::Local::now().date_naive();
    let mut session = QuoteSession::from_config(&config, today)?;
    info!(items = session.quote().items.len(), "Session initialized");

    let (format, width) = match cli.command {
        Some(Command::Serve) => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            ipc::serve(&mut session, &config, stdin, stdout)?;
            return Ok(());
        }
        Some(Command::Print { format, width }) => (
            format.unwrap_or(config.output),
            width.unwrap_or(config.print_width),
        ),
        None => (config.output, config.print_width),
    };

    let output = commands::print::render_document(&session, format, width)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=quote=trace` - Show trace for quote crates only
/// - Default: INFO, DEBUG for quote crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,quote=debug"));

    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_subcommands() {
        let cli = Cli::try_parse_from(["quote-desk"]).unwrap();
        assert_eq!(cli.command, None);

        let cli = Cli::try_parse_from(["quote-desk", "print", "--format", "json", "--width", "100"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Print {
                format: Some(OutputFormat::Json),
                width: Some(100),
            })
        );

        let cli = Cli::try_parse_from(["quote-desk", "serve"]).unwrap();
        assert_eq!(cli.command, Some(Command::Serve));

        assert!(Cli::try_parse_from(["quote-desk", "print", "--format", "pdf"]).is_err());
    }
}
