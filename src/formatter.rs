use crate::analyzer::LevelCounts;
use crate::loader::LineWarning;
use crate::parser::LogRecord;
use serde::Serialize;
use std::io::{self, Write};

// Structs specifically for JSON output
#[derive(Serialize)]
struct JsonOutput<'a> {
    total: usize,
    level_counts: Vec<LevelCount<'a>>,
    filter: Option<FilterOutput<'a>>,
}

#[derive(Serialize)]
struct LevelCount<'a> {
    level: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct FilterOutput<'a> {
    level: &'a str,
    records: &'a [&'a LogRecord],
}

/// Level filter request paired with the records it selected
pub struct FilteredView<'a> {
    pub level: &'a str,
    pub records: &'a [&'a LogRecord],
}

pub fn print_usage_to_writer<W: Write>(writer: &mut W, program: &str) -> io::Result<()> {
    writeln!(writer, "Usage: {} <path_to_log_file> [level]", program)?;
    writeln!(writer, "Example: {} path/to/logfile.log", program)?;
    writeln!(writer, "Example: {} path/to/logfile.log error", program)?;
    Ok(())
}

pub fn print_warnings_to_writer<W: Write>(
    warnings: &[LineWarning],
    writer: &mut W,
) -> io::Result<()> {
    for warning in warnings {
        writeln!(
            writer,
            "Warning: Failed to parse line {}: {}",
            warning.line_number, warning.content
        )?;
    }
    Ok(())
}

/// Print the per-level table, most frequent level first.
pub fn print_level_counts(counts: &LevelCounts) -> io::Result<()> {
    let stdout = io::stdout();
    print_level_counts_to_writer(counts, &mut stdout.lock())
}

// Test-friendly version that can write to any writer
pub fn print_level_counts_to_writer<W: Write>(
    counts: &LevelCounts,
    writer: &mut W,
) -> io::Result<()> {
    if counts.is_empty() {
        writeln!(writer, "No data available for display.")?;
        return Ok(());
    }

    writeln!(writer, "\nLog Level        | Count")?;
    writeln!(writer, "-----------------|----------")?;

    for (level, count) in counts.sorted() {
        writeln!(writer, "{:<16} | {}", level.to_uppercase(), count)?;
    }

    Ok(())
}

/// Print the records selected for `level`, one `date time - message` per line.
pub fn print_filtered_logs(records: &[&LogRecord], level: &str) -> io::Result<()> {
    let stdout = io::stdout();
    print_filtered_logs_to_writer(records, level, &mut stdout.lock())
}

pub fn print_filtered_logs_to_writer<W: Write>(
    records: &[&LogRecord],
    level: &str,
    writer: &mut W,
) -> io::Result<()> {
    let level_upper = level.to_uppercase();

    if records.is_empty() {
        writeln!(writer, "\nNo logs found for level '{}'.", level_upper)?;
        return Ok(());
    }

    writeln!(writer, "\nLog details for level '{}':", level_upper)?;
    for record in records {
        writeln!(writer, "{} {} - {}", record.date, record.time, record.message)?;
    }

    Ok(())
}

/// Write counts and the optional filtered listing as one JSON document.
pub fn print_json_to_writer<W: Write>(
    counts: &LevelCounts,
    filtered: Option<FilteredView<'_>>,
    writer: &mut W,
) -> io::Result<()> {
    let output = JsonOutput {
        total: counts.total(),
        level_counts: counts
            .sorted()
            .into_iter()
            .map(|(level, count)| LevelCount { level, count })
            .collect(),
        filter: filtered.map(|view| FilterOutput {
            level: view.level,
            records: view.records,
        }),
    };

    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)?;
    Ok(())
}
