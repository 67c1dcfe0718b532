use crate::error::LoadError;
use crate::parser::{LogRecord, parse_line};
use log::{debug, error, trace, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Records in file order. Built once by the loader and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogCollection {
    records: Vec<LogRecord>,
}

impl LogCollection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl From<Vec<LogRecord>> for LogCollection {
    fn from(records: Vec<LogRecord>) -> Self {
        LogCollection { records }
    }
}

impl<'a> IntoIterator for &'a LogCollection {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A line that was skipped because it didn't parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based
    pub line_number: usize,
    pub content: String,
}

/// Outcome of a load: the records, what was skipped, and whether the
/// whole source failed. On failure `records` is always empty.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: LogCollection,
    pub warnings: Vec<LineWarning>,
    pub failure: Option<LoadError>,
}

impl LoadReport {
    /// Drop any records but keep the warnings already reported.
    fn failed(failure: LoadError, warnings: Vec<LineWarning>) -> Self {
        LoadReport {
            records: LogCollection::default(),
            warnings,
            failure: Some(failure),
        }
    }
}

/// Load and parse a log file, failing soft.
///
/// Missing or unreadable files come back as an empty collection with
/// `failure` set, never as an `Err`.
pub fn load_logs<P: AsRef<Path>>(path: P) -> LoadReport {
    let path = path.as_ref();
    debug!("Loading log entries from {}", path.display());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let failure = LoadError::from_io(path, e);
            error!("{}", failure);
            return LoadReport::failed(failure, Vec::new());
        }
    };

    let report = read_lines(BufReader::new(file), Some(path));
    debug!(
        "Loaded {} records ({} malformed) from {}",
        report.records.len(),
        report.warnings.len(),
        path.display()
    );
    report
}

/// Run the line loop over any buffered source.
///
/// Read faults here have no path to name and surface as
/// [`LoadError::Stream`].
pub fn load_from_reader<R: BufRead>(reader: R) -> LoadReport {
    read_lines(reader, None)
}

fn read_lines<R: BufRead>(reader: R, path: Option<&Path>) -> LoadReport {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                let failure = match path {
                    Some(path) => LoadError::from_io(path, e),
                    None => LoadError::from_stream_io(e),
                };
                error!("{} (at line {})", failure, line_number);
                return LoadReport::failed(failure, warnings);
            }
        };

        if line.trim().is_empty() {
            trace!("Skipping blank line {}", line_number);
            continue;
        }

        match parse_line(&line) {
            Ok(record) => records.push(record),
            Err(_) => {
                let content = line.trim().to_string();
                warn!("Malformed line {}: {}", line_number, content);
                warnings.push(LineWarning {
                    line_number,
                    content,
                });
            }
        }
    }

    LoadReport {
        records: LogCollection::from(records),
        warnings,
        failure: None,
    }
}
