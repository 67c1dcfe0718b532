use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref RECORD_REGEX: Regex = Regex::new(
        r"^(\d{4}-\d{2}-\d{2}) (\d{2}:\d{2}:\d{2}) (\w+) (.+)"
    ).expect("record pattern is valid");
}

/// One successfully parsed log line.
///
/// All four fields are non-empty; a line that can't be split into this
/// shape never becomes a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub date: String,
    pub time: String,
    /// Level exactly as written in the source, e.g. `ERROR` or `warn`
    pub level: String,
    pub message: String,
}

impl LogRecord {
    /// Case-insensitive level comparison used by filtering
    pub fn level_matches(&self, level: &str) -> bool {
        self.level.to_uppercase() == level.to_uppercase()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.date, self.time, self.level, self.message)
    }
}

impl FromStr for LogRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Parse `<date> <time> <level> <message>` from a single line.
///
/// Surrounding whitespace is trimmed before matching, so the message never
/// keeps trailing spaces. Everything after the level separator is the message.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let trimmed = line.trim();

    let caps = RECORD_REGEX
        .captures(trimmed)
        .ok_or_else(|| ParseError::MalformedLine {
            line: trimmed.to_string(),
        })?;

    Ok(LogRecord {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        level: caps[3].to_string(),
        message: caps[4].to_string(),
    })
}
