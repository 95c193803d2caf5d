//! Output formatting and delivery for diff reports
//!
//! This module provides:
//! - Table output for terminal display
//! - JSON output for machine processing
//! - Destination routing (stdout, stderr, file)

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

use crate::domain::DiffReport;
use crate::error::OutputError;
use clap::ValueEnum;
use std::io::{self, Write};
use std::path::PathBuf;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored table for terminal display
    #[default]
    Cli,
    /// JSON for machine processing
    Json,
}

/// Where the rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dest {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Dest {
    /// Parses a destination argument: the literals `stdout` and `stderr`,
    /// anything else is a file path.
    pub fn parse(option: &str) -> Self {
        match option {
            "stdout" => Dest::Stdout,
            "stderr" => Dest::Stderr,
            path => Dest::File(PathBuf::from(path)),
        }
    }

    /// Whether this destination is a terminal stream rather than a file
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Dest::File(_))
    }
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (table or JSON)
    pub format: OutputFormat,
    /// Output destination
    pub dest: Dest,
    /// Whether to colorize; colors are dropped when writing to a file
    pub color: bool,
}

impl OutputConfig {
    /// Create an output configuration for the given format and destination
    pub fn new(format: OutputFormat, dest: Dest) -> Self {
        let color = dest.is_terminal();
        Self {
            format,
            dest,
            color,
        }
    }
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and write the diff report
    fn format(&self, report: &DiffReport, writer: &mut dyn Write) -> io::Result<()>;
}

/// Create a report formatter based on configuration
pub fn create_formatter(config: &OutputConfig) -> Box<dyn ReportFormatter> {
    match config.format {
        OutputFormat::Cli => Box::new(TableFormatter::new(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Write rendered output to its destination
pub fn deliver(dest: &Dest, content: &[u8]) -> Result<(), OutputError> {
    match dest {
        Dest::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|_| stdout.flush())
                .map_err(|e| OutputError::stream_write("stdout", e))
        }
        Dest::Stderr => {
            let mut stderr = io::stderr().lock();
            stderr
                .write_all(content)
                .and_then(|_| stderr.flush())
                .map_err(|e| OutputError::stream_write("stderr", e))
        }
        Dest::File(path) => {
            std::fs::write(path, content).map_err(|e| OutputError::file_write(path, e))
        }
    }
}
