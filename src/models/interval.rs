//! Booking interval model.
//!
//! An interval is the smallest schedulable unit: a start and an end instant
//! in UTC. Intervals are plain values with no identity and no references to
//! one another; textual parsing and formatting live in the `source` and
//! `report` modules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A booking interval with UTC endpoints.
///
/// Invariant: `end >= start`. Zero-length intervals are permitted.
/// [`Interval::new`] enforces the invariant; values built another way
/// (struct literals, deserialization) can be checked with
/// [`crate::validation::validate_intervals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Start instant (inclusive).
    pub start: DateTime<Utc>,
    /// End instant, never before `start`.
    pub end: DateTime<Utc>,
}

/// Interval construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval ends before it starts: {end} < {start}")]
    EndBeforeStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl Interval {
    /// Creates an interval, rejecting `end < start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, IntervalError> {
        if end < start {
            return Err(IntervalError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Length of this interval.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether two intervals overlap.
    ///
    /// Endpoints are open: back-to-back intervals do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
