//! depdiff - Dependency difference CLI tool
//!
//! Compares the declared dependencies of two package.json manifests and
//! reports additions, removals, and version changes per section.

use clap::Parser;
use depdiff::cli::CliArgs;
use depdiff::diff::get_differences;
use depdiff::output::{create_formatter, deliver, OutputConfig};
use depdiff::progress::Progress;
use depdiff::source::{fetch_manifest, parse_source, HttpClient};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let old_spec = parse_source(&args.old_source);
    let new_spec = parse_source(&args.new_source);

    if args.verbose {
        eprintln!("depdiff v{}", env!("CARGO_PKG_VERSION"));
        eprintln!(
            "Old: {} ({})",
            old_spec.location,
            old_spec.kind.display_name()
        );
        eprintln!(
            "New: {} ({})",
            new_spec.location,
            new_spec.kind.display_name()
        );
    }

    let client = HttpClient::new()?;

    let mut progress = Progress::new(!args.quiet);
    progress.spinner("Fetching manifests");

    let fetched = tokio::try_join!(
        fetch_manifest(&old_spec, &client),
        fetch_manifest(&new_spec, &client),
    );
    progress.finish_and_clear();
    let (old_manifest, new_manifest) = fetched?;

    let report = get_differences(&old_manifest, &new_manifest, args.section)?;

    let config = OutputConfig::new(args.output, args.dest.clone());
    let formatter = create_formatter(&config);

    let mut rendered = Vec::new();
    formatter.format(&report, &mut rendered)?;
    deliver(&config.dest, &rendered)?;

    Ok(ExitCode::SUCCESS)
}
