//! CLI argument parsing module for depdiff

use crate::domain::Scope;
use crate::error::DiffError;
use crate::output::{Dest, OutputFormat};
use clap::Parser;
use std::str::FromStr;

/// Parses the --section option through the scope's own parser so unknown
/// names surface the scope error message
fn parse_scope(option: &str) -> Result<Scope, DiffError> {
    Scope::from_str(option)
}

/// Parses the --dest option: `stdout`, `stderr`, or a file path
fn parse_dest(option: &str) -> Result<Dest, String> {
    Ok(Dest::parse(option))
}

/// Describe the difference in dependencies between two sources
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depdiff",
    version,
    about = "Describe the difference in dependencies between two sources"
)]
pub struct CliArgs {
    /// Old manifest source: a file path, `git:<ref>`, or `npm:<package[@version]>`
    pub old_source: String,

    /// New manifest source, same forms as the old source
    pub new_source: String,

    /// Which sections to compare
    #[arg(short, long, default_value = "all", value_parser = parse_scope)]
    pub section: Scope,

    /// What to do with the output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Cli)]
    pub output: OutputFormat,

    /// Where to print the output
    #[arg(short, long, default_value = "stdout", value_parser = parse_dest)]
    pub dest: Dest,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}
