//! Plan quality metrics.
//!
//! Computes standard indicators from a finished room plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Room count | Rooms the assignment required |
//! | Span | Earliest booking start to latest booking end |
//! | Occupancy | Booked time / plan span, per room |

use chrono::Duration;

use crate::models::RoomPlan;

/// Quality indicators for a room plan.
#[derive(Debug, Clone)]
pub struct PlanStats {
    /// Number of rooms used.
    pub room_count: usize,
    /// Total bookings placed.
    pub interval_count: usize,
    /// Time from the earliest start to the latest end.
    pub span: Duration,
    /// Booked time / span for each room, in room creation order (0.0..1.0).
    pub occupancy_by_room: Vec<f64>,
    /// Mean of `occupancy_by_room`.
    pub avg_occupancy: f64,
}

impl PlanStats {
    /// Computes stats from a finished plan.
    ///
    /// An empty plan yields zeroed stats; a zero-length span (all bookings
    /// degenerate) yields zero occupancy.
    pub fn calculate(plan: &RoomPlan) -> Self {
        let span = match (plan.earliest_start(), plan.latest_end()) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        };
        let span_ms = span.num_milliseconds();

        let occupancy_by_room: Vec<f64> = plan
            .rooms
            .iter()
            .map(|room| {
                if span_ms <= 0 {
                    0.0
                } else {
                    room.busy_time().num_milliseconds() as f64 / span_ms as f64
                }
            })
            .collect();

        let avg_occupancy = if occupancy_by_room.is_empty() {
            0.0
        } else {
            occupancy_by_room.iter().sum::<f64>() / occupancy_by_room.len() as f64
        };

        Self {
            room_count: plan.room_count(),
            interval_count: plan.interval_count(),
            span,
            occupancy_by_room,
            avg_occupancy,
        }
    }
}
