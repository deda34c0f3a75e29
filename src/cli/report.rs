//! Report formatting and printing utilities.
//!
//! Everything the CLI shows the user goes through here. Commands only compute
//! results, so the library can be used without console output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, DatasetStats, FlattenSummary, IndexSummary, InitSummary,
    LookupSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SkippedLabel;
use crate::json_writer::write_json;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Prefix of skipped-label warnings.
pub const WARNING_MARK: &str = "\u{26a0}\u{fe0f}"; // ⚠️

/// Print a command result: diagnostics on stderr, output on stdout.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, verbose, &mut stdout, &mut stderr)
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    print_skipped_to(&result.skipped, err);
    if verbose && let Some(stats) = &result.dataset {
        print_stats_to(stats, result.skipped.len(), err);
    }

    match &result.summary {
        CommandSummary::Flatten(summary) => print_flatten_to(summary, out)?,
        CommandSummary::Index(summary) => print_index_to(summary, out),
        CommandSummary::Lookup(summary) => print_lookup_to(summary, out),
        CommandSummary::Init(summary) => print_init_to(summary, out, err),
    }
    Ok(())
}

/// One warning line per skipped label, in encounter order.
pub fn print_skipped_to<W: Write>(skipped: &[SkippedLabel], writer: &mut W) {
    for label in skipped {
        let _ = writeln!(writer, "{} {}", WARNING_MARK, label);
    }
}

fn print_stats_to<W: Write>(stats: &DatasetStats, skipped: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Flattened {} {} from {} {} ({} skipped)",
        stats.record_count,
        if stats.record_count == 1 { "record" } else { "records" },
        stats.label_count,
        if stats.label_count == 1 { "label" } else { "labels" },
        skipped
    );
}

fn print_flatten_to<W: Write>(summary: &FlattenSummary, writer: &mut W) -> Result<()> {
    match &summary.output {
        None => write_json(writer, &summary.records),
        Some(path) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} records to {}",
                    summary.records.len(),
                    path.display()
                )
                .green()
            );
            Ok(())
        }
    }
}

fn print_index_to<W: Write>(summary: &IndexSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Saved {} entries to {}",
            summary.entry_count,
            summary.output.display()
        )
        .green()
    );
}

fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    match &summary.source {
        Some(source) => {
            let _ = writeln!(
                writer,
                "{}: {} ({})",
                summary.address,
                source.label.bold(),
                source.kind
            );
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {} is not a known funding source",
                FAILURE_MARK.red(),
                summary.address
            );
        }
    }
}

fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
