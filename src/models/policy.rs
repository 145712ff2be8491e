//! Endpoint-overlap policy.
//!
//! Controls whether a booking may start at the exact instant the previous
//! booking in the same room ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether two bookings in the same room may share an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointPolicy {
    /// Back-to-back bookings need separate rooms: a booking fits after a
    /// previous one only when it starts strictly after the previous end.
    #[default]
    Exclusive,
    /// A booking may start exactly when the previous one ends.
    Shared,
}

impl EndpointPolicy {
    /// Whether a booking starting at `next_start` may follow one ending at
    /// `prev_end` in the same room.
    #[inline]
    pub fn allows(&self, prev_end: DateTime<Utc>, next_start: DateTime<Utc>) -> bool {
        match self {
            EndpointPolicy::Exclusive => next_start > prev_end,
            EndpointPolicy::Shared => next_start >= prev_end,
        }
    }
}
