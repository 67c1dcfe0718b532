use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::io::Write;
use tempfile::NamedTempFile;

use logtally::analyzer::{count_by_level, filter_by_level};
use logtally::formatter::{print_filtered_logs_to_writer, print_level_counts_to_writer};
use logtally::loader::load_logs;

// Helper function to create a large log file for benchmarking
fn create_large_log_file(lines: usize) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();

    for i in 0..lines {
        // Every 50th line is malformed to keep the warning path warm
        if i % 50 == 49 {
            writeln!(temp_file, "garbage without a timestamp #{}", i).unwrap();
            continue;
        }

        let level = match i % 5 {
            0 => "ERROR",
            1 => "WARN",
            2 => "INFO",
            3 => "DEBUG",
            _ => "info",
        };

        let message = match i % 6 {
            0 => "NullPointerException in WebController.java:42",
            1 => "Connection timeout in NetworkClient.java:86",
            2 => "Database query took 2.3s in DatabaseService.java:128",
            3 => "Application started successfully",
            4 => "Cache miss for key: user_profile_123",
            _ => "Request processed in 150ms",
        };

        writeln!(
            temp_file,
            "2025-03-21 {:02}:{:02}:{:02} {} {}",
            (i / 3600) % 24,
            (i / 60) % 60,
            i % 60,
            level,
            message
        )
        .unwrap();
    }

    temp_file
}

fn bench_pipeline(c: &mut Criterion) {
    let temp_file = create_large_log_file(10_000);
    let path = temp_file.path();

    let mut group = c.benchmark_group("pipeline");

    group.bench_function("load", |b| {
        b.iter(|| black_box(load_logs(path)));
    });

    let report = load_logs(path);

    group.bench_function("count", |b| {
        b.iter(|| black_box(count_by_level(&report.records)));
    });

    group.bench_function("filter", |b| {
        b.iter(|| black_box(filter_by_level(&report.records, "error")));
    });

    group.bench_function("render", |b| {
        let counts = count_by_level(&report.records);
        let filtered = filter_by_level(&report.records, "error");
        b.iter(|| {
            let mut sink = Vec::with_capacity(64 * 1024);
            print_level_counts_to_writer(&counts, &mut sink).unwrap();
            print_filtered_logs_to_writer(&filtered, "error", &mut sink).unwrap();
            black_box(sink);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
