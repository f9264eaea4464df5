//! Report formatting and printing utilities.
//!
//! Separate from command logic so the command handlers stay printable-free
//! and the library can be used without console side effects.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::commands::{
    CheckReport, CommandResult, CommandSummary, GenerateSummary, ScanReport,
};
use crate::scanner::VariableRecord;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's result to stdout.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(result, verbose, &mut io::stdout().lock())
}

/// Print a command's result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) -> Result<()> {
    match &result.summary {
        CommandSummary::Scan(report) => print_scan(report, verbose, writer),
        CommandSummary::Generate(summary) => print_generate(summary, writer),
        CommandSummary::Check(report) => print_check(report, verbose, writer),
    }
}

fn print_scan<W: Write>(report: &ScanReport, verbose: bool, writer: &mut W) -> Result<()> {
    let summary = &report.summary;

    if report.json {
        let doc = json!({
            "total": summary.variables.len(),
            "missing": report.missing.len(),
            "existing": report.existing.len(),
            "variables": summary.variables,
        });
        writeln!(writer, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} Analyzed {} files",
        SUCCESS_MARK.green(),
        summary.total_files.to_string().bold()
    )?;

    if summary.is_empty() {
        writeln!(
            writer,
            "\n{}",
            "No environment variables found".yellow()
        )?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} Found {} unique environment variables",
        SUCCESS_MARK.green(),
        summary.variables.len().to_string().bold()
    )?;
    writeln!(
        writer,
        "{}\n",
        format!("  ({} total occurrences)", summary.total_occurrences).dimmed()
    )?;

    if !report.missing.is_empty() {
        writeln!(
            writer,
            "{}",
            format!("Missing from .env ({}):", report.missing.len())
                .red()
                .bold()
        )?;
        for variable in &report.missing {
            print_variable(variable, verbose, writer)?;
        }
        writeln!(writer)?;
    }

    if !report.existing.is_empty() {
        writeln!(
            writer,
            "{}",
            format!("{} Found in .env ({}):", SUCCESS_MARK, report.existing.len())
                .green()
                .bold()
        )?;
        if verbose {
            for variable in &report.existing {
                print_variable(variable, true, writer)?;
            }
        } else {
            let names: Vec<&str> = report.existing.iter().map(|v| v.name.as_str()).collect();
            writeln!(writer, "{}", format!("  {}", names.join(", ")).dimmed())?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn print_variable<W: Write>(
    variable: &VariableRecord,
    verbose: bool,
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "  • {}", variable.name.bold())?;

    if verbose {
        writeln!(
            writer,
            "{}",
            format!("    Category: {}", variable.category).dimmed()
        )?;
        for location in &variable.locations {
            writeln!(
                writer,
                "{}",
                format!("    Used in {}:{}", location.file, location.line).dimmed()
            )?;
        }
    } else {
        let first = &variable.locations[0];
        writeln!(
            writer,
            "{}",
            format!("    Used in {}:{}", first.file, first.line).dimmed()
        )?;
        if variable.locations.len() > 1 {
            writeln!(
                writer,
                "{}",
                format!("    +{} more location(s)", variable.locations.len() - 1).dimmed()
            )?;
        }
    }

    Ok(())
}

fn print_generate<W: Write>(summary: &GenerateSummary, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "{} Analyzed {} files",
        SUCCESS_MARK.green(),
        summary.total_files.to_string().bold()
    )?;

    if !summary.written {
        writeln!(
            writer,
            "\n{}",
            "No environment variables found, nothing to generate".yellow()
        )?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} Wrote {} variables to {}",
        SUCCESS_MARK.green(),
        summary.variable_count.to_string().bold(),
        summary.output.display().to_string().bold()
    )?;

    Ok(())
}

fn print_check<W: Write>(report: &CheckReport, verbose: bool, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "{} Analyzed {} files, found {} variables",
        SUCCESS_MARK.green(),
        report.total_files.to_string().bold(),
        report.scanned_count.to_string().bold()
    )?;

    if report.issue_count() == 0 {
        writeln!(
            writer,
            "{} Environment is in sync with {}",
            SUCCESS_MARK.green(),
            report.env_path.display()
        )?;
        return Ok(());
    }

    if !report.missing.is_empty() {
        writeln!(
            writer,
            "\n{}",
            format!(
                "{} Missing from {} ({}):",
                FAILURE_MARK,
                report.env_path.display(),
                report.missing.len()
            )
            .red()
            .bold()
        )?;
        for variable in &report.missing {
            print_variable(variable, verbose, writer)?;
        }
    }

    if !report.unused.is_empty() {
        writeln!(
            writer,
            "\n{}",
            format!("Declared but never used ({}):", report.unused.len())
                .yellow()
                .bold()
        )?;
        for name in &report.unused {
            writeln!(writer, "  • {}", name)?;
        }
    }

    Ok(())
}
