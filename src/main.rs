use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

use logtally::analyzer::{count_by_level, filter_by_level};
use logtally::cli::Args;
use logtally::formatter::{
    FilteredView, print_filtered_logs, print_json_to_writer, print_level_counts,
    print_usage_to_writer, print_warnings_to_writer,
};
use logtally::loader::load_logs;

fn main() -> ExitCode {
    // Diagnostics only when RUST_LOG asks for them
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<ExitCode> {
    let stdout = io::stdout();
    let stderr = io::stderr();

    let Some(file) = args.file.as_deref() else {
        print_usage_to_writer(&mut stdout.lock(), env!("CARGO_PKG_NAME"))?;
        return Ok(ExitCode::FAILURE);
    };

    let report = load_logs(file);

    // Keep stdout a clean JSON document in JSON mode
    let mut diagnostics: Box<dyn Write> = if args.json {
        Box::new(stderr.lock())
    } else {
        Box::new(stdout.lock())
    };

    if !args.quiet {
        print_warnings_to_writer(&report.warnings, &mut diagnostics)?;
    }
    if let Some(failure) = &report.failure {
        writeln!(diagnostics, "{}", failure)?;
    }

    if report.records.is_empty() {
        writeln!(diagnostics, "Failed to load any log entries.")?;
        return Ok(ExitCode::FAILURE);
    }
    drop(diagnostics);

    let counts = count_by_level(&report.records);
    debug!("Counted {} distinct levels", counts.len());

    let filtered = args
        .level
        .as_deref()
        .filter(|level| !level.is_empty())
        .map(|level| (level, filter_by_level(&report.records, level)));

    if args.json {
        let view = filtered.as_ref().map(|(level, records)| FilteredView {
            level,
            records: records.as_slice(),
        });
        print_json_to_writer(&counts, view, &mut stdout.lock())?;
    } else {
        print_level_counts(&counts)?;
        if let Some((level, records)) = &filtered {
            print_filtered_logs(records, level)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
