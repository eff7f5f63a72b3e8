//! sbomcmp command-line interface.
//!
//! This is the main entry point for the sbomcmp CLI tool. It uses clap
//! for argument parsing and wires together the library modules to load,
//! compare, and report on two SBOM files.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use sbomcmp::{compare, format_report, load_components, OutputFormat, OutputOptions};
use std::path::PathBuf;
use std::process;

/// sbomcmp - Compare Maven components between two SBOM files
///
/// Reads two CycloneDX-style JSON documents, indexes their Maven
/// library components, and reports version mismatches and components
/// present on only one side.
#[derive(Parser)]
#[command(name = "sbomcmp")]
#[command(version)]
#[command(about = "Compare Maven components between two SBOM files", long_about = None)]
struct Cli {
    /// First SBOM file to compare
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second SBOM file to compare
    #[arg(value_name = "SECOND")]
    second: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Quiet mode (suppress the summary line)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output (show loading progress)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    // Usage errors print to stdout and exit 1; help and version keep
    // clap's exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", err);
            process::exit(0);
        }
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.verbose {
        eprintln!("Loading {}...", cli.first.display());
    }

    let first = load_components(&cli.first)
        .with_context(|| format!("Failed to load first file: {}", cli.first.display()))?;

    if cli.verbose {
        eprintln!("Loading {}...", cli.second.display());
    }

    let second = load_components(&cli.second)
        .with_context(|| format!("Failed to load second file: {}", cli.second.display()))?;

    if cli.verbose {
        eprintln!(
            "Comparing {} and {} Maven components...",
            first.len(),
            second.len()
        );
    }

    let report = compare(&first, &second);

    let options = OutputOptions { quiet: cli.quiet };
    let format: OutputFormat = cli.format.into();
    let output = format_report(
        &report,
        &cli.first.to_string_lossy(),
        &cli.second.to_string_lossy(),
        &format,
        &options,
    )
    .context("Failed to format comparison output")?;

    print!("{}", output);

    if report.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Terminal),
            OutputFormat::Terminal
        );
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Plain),
            OutputFormat::Plain
        );
    }
}
