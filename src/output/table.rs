//! Table output for terminal display
//!
//! Renders one block per section: a header, then rows grouped
//! added / removed / changed with +/-/~ markers, colored by change
//! classification.

use crate::domain::{DependencyDiff, DiffKind, DiffReport};
use crate::output::ReportFormatter;
use colored::Colorize;
use std::io::{self, Write};

/// Table formatter for terminal display
pub struct TableFormatter {
    /// Whether to colorize output
    color: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, section: &str) -> String {
        if self.color {
            section.cyan().to_string()
        } else {
            section.to_string()
        }
    }

    fn empty_note(&self, section: &str) -> String {
        let note = format!("no changes found in {}", section);
        if self.color {
            note.dimmed().to_string()
        } else {
            note
        }
    }

    fn row(
        &self,
        record: &DependencyDiff,
        name_width: usize,
        old_width: usize,
        new_width: usize,
    ) -> String {
        let old_version = record.old.as_deref().unwrap_or("");
        let new_version = record.new.as_deref().unwrap_or("");

        let (marker, arrow, label) = if record.is_added() {
            ("+", " ", "added")
        } else if record.is_removed() {
            ("-", " ", "removed")
        } else {
            let label = record.kind.map_or("changed", |kind| kind.label());
            ("~", "→", label)
        };

        let line = format!(
            "  {} {:<name_width$}  {:<old_width$}  {}  {:<new_width$}  {}",
            marker, record.package, old_version, arrow, new_version, label,
        );

        self.colorize(line, record)
    }

    fn colorize(&self, line: String, record: &DependencyDiff) -> String {
        if !self.color {
            return line;
        }

        if record.is_added() {
            line.as_str().green().to_string()
        } else if record.is_removed() {
            line.as_str().bright_red().to_string()
        } else {
            match record.kind {
                Some(DiffKind::Major) => line.as_str().truecolor(255, 165, 0).to_string(),
                Some(DiffKind::Minor) => line.as_str().yellow().to_string(),
                _ => line.as_str().bright_yellow().to_string(),
            }
        }
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &DiffReport, writer: &mut dyn Write) -> io::Result<()> {
        for (section, records) in report {
            writeln!(writer, "{}", self.header(section))?;

            if records.is_empty() {
                writeln!(writer, "  {}", self.empty_note(section))?;
                writeln!(writer)?;
                continue;
            }

            let name_width = records.iter().map(|r| r.package.len()).max().unwrap_or(0);
            let old_width = records
                .iter()
                .filter_map(|r| r.old.as_deref().map(str::len))
                .max()
                .unwrap_or(0);
            let new_width = records
                .iter()
                .filter_map(|r| r.new.as_deref().map(str::len))
                .max()
                .unwrap_or(0);

            for record in records.iter().filter(|r| r.is_added()) {
                writeln!(writer, "{}", self.row(record, name_width, old_width, new_width))?;
            }
            for record in records.iter().filter(|r| r.is_removed()) {
                writeln!(writer, "{}", self.row(record, name_width, old_width, new_width))?;
            }
            for record in records.iter().filter(|r| r.is_changed()) {
                writeln!(writer, "{}", self.row(record, name_width, old_width, new_width))?;
            }

            writeln!(writer)?;
        }

        Ok(())
    }
}
