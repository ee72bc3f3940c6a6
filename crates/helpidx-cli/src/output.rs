//! Report formatting for `--check` and `--stats`.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use helpidx_core::{Diagnostic, IndexStats};
use serde::Serialize;
use std::io::Write;

/// Output format for reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    ok: bool,
    diagnostics: &'a [Diagnostic],
    stats: &'a IndexStats,
}

/// Print the result of `--check`.
pub fn print_check<W: Write>(
    out: &mut W,
    format: OutputFormat,
    diagnostics: &[Diagnostic],
    stats: &IndexStats,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = CheckReport {
                ok: diagnostics.is_empty(),
                diagnostics,
                stats,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        },
        OutputFormat::Text => {
            for diagnostic in diagnostics {
                writeln!(
                    out,
                    "{}: {}: {}",
                    diagnostic.location.to_string().bold(),
                    "warning".yellow(),
                    diagnostic.message
                )?;
                writeln!(out, "    {}", diagnostic.line.dimmed())?;
            }
            if diagnostics.is_empty() {
                writeln!(
                    out,
                    "{} {} entries under {} concepts",
                    "ok:".green(),
                    stats.entries,
                    stats.primary_keys
                )?;
            } else {
                writeln!(
                    out,
                    "{} {} malformed record(s)",
                    "found".red(),
                    diagnostics.len()
                )?;
            }
        },
    }
    Ok(())
}

/// Print build statistics.
pub fn print_stats<W: Write>(out: &mut W, format: OutputFormat, stats: &IndexStats) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, stats)?;
            writeln!(out)?;
        },
        OutputFormat::Text => {
            writeln!(out, "{}", "Index statistics".bold())?;
            let rows = [
                ("sources", stats.sources),
                ("lines", stats.lines),
                ("associations", stats.associations),
                ("concepts", stats.primary_keys),
                ("entries", stats.entries),
                ("replaced", stats.replaced),
                ("diagnostics", stats.diagnostics),
            ];
            for (name, value) in rows {
                writeln!(out, "  {name:<14}{value}")?;
            }
        },
    }
    Ok(())
}
