//! Result rendering for the CLI.
//!
//! Supports a human-readable rendering and the JSON result record
//! (`changed`/`failed`/`msg`) consumed by configuration-management callers.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::error::Error;
use crate::reconcile::{Message, Reconciliation};

/// Output format for reconciliation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Key/value lines for interactive use.
    Human,
    /// The JSON result record.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rendering context for reconciliation results.
#[derive(Debug, Clone, Copy)]
pub struct OutputContext {
    /// Selected output format.
    pub format: OutputFormat,
}

impl OutputContext {
    /// Write `result` to stdout in the selected format.
    pub fn write_result(&self, result: &Reconciliation) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self.format {
            OutputFormat::Json => {
                let rendered = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
                writeln!(stdout, "{}", rendered)
            }
            OutputFormat::Human => write_human(&mut stdout, result),
        }
    }
}

fn write_human<W: Write>(w: &mut W, result: &Reconciliation) -> io::Result<()> {
    writeln!(w, "changed: {}", result.changed)?;
    writeln!(w, "failed:  {}", result.failed)?;
    match &result.message {
        Some(Message::Text(text)) => writeln!(w, "message: {}", text)?,
        Some(Message::Status(status)) => {
            if let Some(reported) = status.status() {
                writeln!(w, "status:  {}", reported)?;
            }
            for (key, value) in &status.detail {
                writeln!(w, "  {}: {}", key, value)?;
            }
        }
        None => {}
    }
    Ok(())
}

/// Write an error to stderr.
pub fn write_error(err: &Error) {
    eprintln!("Error: {}", err);
}
