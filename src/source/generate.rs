//! Synthetic booking generation.
//!
//! Produces uniform random bookings confined to a half-open time window,
//! for demos and stress tests. Deterministic for a seeded RNG.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::Interval;

use super::SourceError;

/// Generates `count` random bookings within `[window_start, window_end)`.
///
/// Each booking's start is uniform over the window in whole seconds; its
/// end is then uniform between the start and the window end, so
/// `end >= start` always holds and zero-length bookings are possible.
/// A window shorter than one second is rejected as
/// [`SourceError::EmptyWindow`].
pub fn generate_bookings<R: Rng>(
    rng: &mut R,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    count: usize,
) -> Result<Vec<Interval>, SourceError> {
    let window_secs = (window_end - window_start).num_seconds();
    if window_secs <= 0 {
        return Err(SourceError::EmptyWindow {
            start: window_start,
            end: window_end,
        });
    }

    let mut bookings = Vec::with_capacity(count);
    for _ in 0..count {
        let start_offset = rng.random_range(0..window_secs);
        let end_offset = start_offset + rng.random_range(0..window_secs - start_offset);
        bookings.push(Interval {
            start: window_start + Duration::seconds(start_offset),
            end: window_start + Duration::seconds(end_offset),
        });
    }

    Ok(bookings)
}
