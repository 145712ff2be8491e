//! Greedy first-fit room scheduler.
//!
//! # Algorithm
//!
//! 1. Sort bookings by start time (stable: equal starts keep input order).
//! 2. For each booking, scan rooms in creation order and place it in the
//!    first room whose last booking it may follow under the policy.
//! 3. Open a new room when no existing room fits.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n · r) for placement, r = final room count.

use crate::models::{EndpointPolicy, Interval, Room, RoomPlan};

/// Greedy first-fit room scheduler.
///
/// Computes the minimum number of rooms needed so that no two bookings in
/// the same room overlap under the configured [`EndpointPolicy`], along with
/// the concrete assignment.
///
/// # Example
///
/// ```
/// use roomier::models::{EndpointPolicy, Interval};
/// use roomier::scheduler::FirstFitScheduler;
/// use roomier::source::parse_timestamp;
///
/// let bookings = vec![
///     Interval::new(
///         parse_timestamp("2018-08-01T08:00:00Z").unwrap(),
///         parse_timestamp("2018-08-01T10:00:00Z").unwrap(),
///     )
///     .unwrap(),
///     Interval::new(
///         parse_timestamp("2018-08-01T08:30:00Z").unwrap(),
///         parse_timestamp("2018-08-01T09:30:00Z").unwrap(),
///     )
///     .unwrap(),
/// ];
///
/// let scheduler = FirstFitScheduler::new(EndpointPolicy::Exclusive);
/// let plan = scheduler.schedule(&bookings);
/// assert_eq!(plan.room_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FirstFitScheduler {
    policy: EndpointPolicy,
}

impl FirstFitScheduler {
    /// Creates a scheduler with the given endpoint policy.
    pub fn new(policy: EndpointPolicy) -> Self {
        Self { policy }
    }

    /// Sets the endpoint policy.
    pub fn with_policy(mut self, policy: EndpointPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Policy this scheduler applies.
    pub fn policy(&self) -> EndpointPolicy {
        self.policy
    }

    /// Assigns bookings to the minimum number of rooms.
    ///
    /// The input may be unsorted and may contain duplicates; it is assumed
    /// well-formed (`end >= start`, see [`crate::validation`]). Bookings are
    /// processed start-ascending; two bookings sharing a start time keep
    /// their input order (stable sort), which pins the exact assignment for
    /// repeat runs. Every booking lands in exactly one room. Empty input
    /// yields an empty plan.
    pub fn schedule(&self, intervals: &[Interval]) -> RoomPlan {
        let mut sorted = intervals.to_vec();
        sorted.sort_by_key(|interval| interval.start);

        let mut rooms: Vec<Room> = Vec::new();
        'placement: for interval in sorted {
            for room in &mut rooms {
                if room.accepts(&interval, self.policy) {
                    room.push(interval);
                    continue 'placement;
                }
            }
            rooms.push(Room::with_first(interval));
        }

        RoomPlan { rooms }
    }
}
