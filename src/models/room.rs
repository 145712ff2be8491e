//! Room and room-plan models.
//!
//! A room holds the bookings assigned to one resource, start-ascending; a
//! plan is the full set of rooms produced by one scheduling call. Plans are
//! built once, read by reporting, and dropped; nothing mutates a finished
//! plan.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{EndpointPolicy, Interval};

/// Bookings assigned to a single room, ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Assigned bookings in placement order (start-ascending).
    pub intervals: Vec<Interval>,
}

impl Room {
    /// Creates a room holding a single booking.
    pub fn with_first(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Whether `candidate` can be appended without violating `policy`.
    ///
    /// Only the last booking is inspected: bookings arrive start-ascending,
    /// so the last one also has the latest end.
    pub fn accepts(&self, candidate: &Interval, policy: EndpointPolicy) -> bool {
        match self.intervals.last() {
            None => true,
            Some(prev) => policy.allows(prev.end, candidate.start),
        }
    }

    /// Appends a booking.
    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Last-assigned booking.
    pub fn last(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    /// Number of bookings in this room.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the room holds no bookings.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total booked time in this room.
    pub fn busy_time(&self) -> Duration {
        self.intervals
            .iter()
            .map(Interval::duration)
            .fold(Duration::zero(), |acc, d| acc + d)
    }
}

/// A complete room assignment (solution).
///
/// Every input booking appears in exactly one room; rooms are kept in
/// creation order, which is also the order the scheduler scanned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlan {
    /// Rooms in creation order.
    pub rooms: Vec<Room>,
}

impl RoomPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rooms the assignment required.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Total bookings across all rooms.
    pub fn interval_count(&self) -> usize {
        self.rooms.iter().map(Room::len).sum()
    }

    /// Whether the plan has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All placed bookings, room by room.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.rooms.iter().flat_map(|room| room.intervals.iter())
    }

    /// Earliest booking start across the plan.
    pub fn earliest_start(&self) -> Option<DateTime<Utc>> {
        self.intervals().map(|interval| interval.start).min()
    }

    /// Latest booking end across the plan.
    pub fn latest_end(&self) -> Option<DateTime<Utc>> {
        self.intervals().map(|interval| interval.end).max()
    }
}
