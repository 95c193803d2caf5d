//! JSON output for machine processing
//!
//! Serializes the report as `{section: [{package, old?, new?, type}]}`,
//! pretty-printed, with section and record order preserved.

use crate::domain::DiffReport;
use crate::output::ReportFormatter;
use std::io::{self, Write};

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &DiffReport, writer: &mut dyn Write) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}
