//! Comma-delimited booking files.
//!
//! One booking per line: `start,end`, both timestamps in
//! [`TIME_FORMAT`](super::TIME_FORMAT). Blank lines are skipped and
//! surrounding whitespace is tolerated; anything else aborts with the
//! offending 1-based line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::models::Interval;

use super::{parse_timestamp, SourceError};

/// Reads bookings from a comma-delimited file.
///
/// An empty file yields an empty vector; the scheduler treats that as a
/// zero-room plan rather than an error.
pub fn read_bookings<P: AsRef<Path>>(path: P) -> Result<Vec<Interval>, SourceError> {
    let file = File::open(path)?;
    parse_bookings(BufReader::new(file))
}

/// Parses bookings from any buffered reader.
pub fn parse_bookings<R: BufRead>(reader: R) -> Result<Vec<Interval>, SourceError> {
    let mut bookings = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() != 2 {
            return Err(SourceError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let start = parse_field(fields[0], line_no)?;
        let end = parse_field(fields[1], line_no)?;
        let interval = Interval::new(start, end)
            .map_err(|source| SourceError::Interval {
                line: line_no,
                source,
            })?;
        bookings.push(interval);
    }

    Ok(bookings)
}

fn parse_field(value: &str, line: usize) -> Result<DateTime<Utc>, SourceError> {
    parse_timestamp(value).map_err(|source| SourceError::Timestamp {
        line,
        value: value.trim().to_string(),
        source,
    })
}
