//! Booking interval sources.
//!
//! Collaborators that produce intervals for the scheduler: random generation
//! within a time window and comma-delimited text files. Parsing failures
//! surface immediately; a silently dropped booking would corrupt the plan.

mod csv;
mod generate;

pub use csv::{parse_bookings, read_bookings};
pub use generate::generate_bookings;

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use crate::models::IntervalError;

/// Canonical textual timestamp format, e.g. `2018-08-01T00:00:00Z`.
///
/// Shared by parsing ([`parse_timestamp`]) and reporting
/// ([`crate::report::format_interval`]).
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses a timestamp in [`TIME_FORMAT`] as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), TIME_FORMAT).map(|naive| naive.and_utc())
}

/// Errors produced by interval sources.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("can't read bookings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `start,end`, found {found} fields")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid timestamp `{value}`")]
    Timestamp {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line}: {source}")]
    Interval {
        line: usize,
        #[source]
        source: IntervalError,
    },

    #[error("generation window is empty: {end} <= {start}")]
    EmptyWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("2018-08-01T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2018-08-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_trims_whitespace() {
        assert!(parse_timestamp(" 2018-08-01T12:30:45Z ").is_ok());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday at noon").is_err());
        assert!(parse_timestamp("2018-08-01 00:00:00").is_err());
    }
}
