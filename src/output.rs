//! Output formatting for comparison reports.
//!
//! This module renders a [`CompareReport`] as colored terminal output,
//! plain text, or JSON. The terminal and plain formats emit one line per
//! discrepancy followed by a summary line; JSON carries the findings and
//! stats in machine-readable form.
//!
//! # Examples
//!
//! ```
//! use sbomcmp::{compare, format_report, ComponentIndex, OutputFormat, OutputOptions};
//!
//! let first: ComponentIndex =
//!     [(Some("libX".to_string()), Some("1.0".to_string()))].into_iter().collect();
//! let second: ComponentIndex =
//!     [(Some("libX".to_string()), Some("2.0".to_string()))].into_iter().collect();
//! let report = compare(&first, &second);
//!
//! let output = format_report(
//!     &report,
//!     "a.json",
//!     "b.json",
//!     &OutputFormat::Plain,
//!     &OutputOptions::default(),
//! ).unwrap();
//! assert!(output.contains("libX"));
//! ```

use crate::compare::{CompareReport, Finding, FindingKind};
use crate::error::OutputError;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the report
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Suppress the trailing summary line.
    pub quiet: bool,
}

/// Formats a comparison report according to the specified format.
///
/// # Arguments
///
/// * `report` - The comparison report to format
/// * `first_path` - Display name of the first input file
/// * `second_path` - Display name of the second input file
/// * `format` - The output format (Terminal, JSON, or Plain)
/// * `options` - Formatting options
///
/// # Errors
///
/// Returns an `OutputError` if JSON serialization fails.
pub fn format_report(
    report: &CompareReport,
    first_path: &str,
    second_path: &str,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_text(report, first_path, second_path, options, true)),
        OutputFormat::Plain => Ok(format_text(report, first_path, second_path, options, false)),
        OutputFormat::Json => format_json(report, first_path, second_path),
    }
}

/// Formats the report as discrepancy lines plus a summary.
///
/// With `colorize` set, mismatches are yellow, components missing from
/// the second file red, and components missing from the first green,
/// following the usual diff color scheme.
fn format_text(
    report: &CompareReport,
    first_path: &str,
    second_path: &str,
    options: &OutputOptions,
    colorize: bool,
) -> String {
    let mut output = String::new();

    for finding in &report.findings {
        let line = finding_line(finding, first_path, second_path);
        let line = if colorize {
            match finding.kind {
                FindingKind::VersionMismatch { .. } => line.yellow().to_string(),
                FindingKind::OnlyInFirst { .. } => line.red().to_string(),
                FindingKind::OnlyInSecond { .. } => line.green().to_string(),
            }
        } else {
            line
        };
        output.push_str(&line);
        output.push('\n');
    }

    if !options.quiet {
        output.push_str(&summary_line(report));
        output.push('\n');
    }

    output
}

/// Renders one finding as a human-readable line.
fn finding_line(finding: &Finding, first_path: &str, second_path: &str) -> String {
    let name = display_name(&finding.name);
    match &finding.kind {
        FindingKind::VersionMismatch { first, second } => format!(
            "Component {} has different versions: {} (in {}) and {} (in {})",
            name,
            display_version(first),
            first_path,
            display_version(second),
            second_path
        ),
        FindingKind::OnlyInFirst { .. } => format!(
            "Component {} is in the first file ({}) but not in the second ({})",
            name, first_path, second_path
        ),
        FindingKind::OnlyInSecond { .. } => format!(
            "Component {} is in the second file ({}) but not in the first ({})",
            name, second_path, first_path
        ),
    }
}

/// Renders the summary line: either `no error found` or the error count
/// with the accuracy metric and both index sizes.
fn summary_line(report: &CompareReport) -> String {
    if report.is_empty() {
        return "no error found".to_string();
    }
    format!(
        "{} errors found, tool accuracy {:.2} (first file has {} components, second file has {} components)",
        report.stats.total(),
        report.accuracy(),
        report.first_len,
        report.second_len
    )
}

/// Formats the report as JSON.
fn format_json(
    report: &CompareReport,
    first_path: &str,
    second_path: &str,
) -> Result<String, OutputError> {
    use serde_json::json;

    let findings: Vec<serde_json::Value> = report
        .findings
        .iter()
        .map(|f| match &f.kind {
            FindingKind::VersionMismatch { first, second } => json!({
                "kind": "version_mismatch",
                "name": f.name,
                "first_version": first,
                "second_version": second,
            }),
            FindingKind::OnlyInFirst { version } => json!({
                "kind": "only_in_first",
                "name": f.name,
                "version": version,
            }),
            FindingKind::OnlyInSecond { version } => json!({
                "kind": "only_in_second",
                "name": f.name,
                "version": version,
            }),
        })
        .collect();

    let output = json!({
        "first_file": first_path,
        "second_file": second_path,
        "findings": findings,
        "stats": {
            "mismatched": report.stats.mismatched,
            "only_in_first": report.stats.only_in_first,
            "only_in_second": report.stats.only_in_second,
            "total": report.stats.total(),
            "accuracy": report.accuracy(),
            "first_components": report.first_len,
            "second_components": report.second_len,
        }
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn display_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("(unnamed)")
}

fn display_version(version: &Option<String>) -> &str {
    version.as_deref().unwrap_or("(none)")
}
