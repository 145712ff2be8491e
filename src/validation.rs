//! Input validation and plan verification.
//!
//! Checks structural integrity on both sides of the scheduler:
//! - `validate_intervals` rejects malformed intervals before scheduling
//! - `verify_plan` checks a finished plan against its input: coverage,
//!   per-room ordering, and the endpoint policy

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{EndpointPolicy, Interval, RoomPlan};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An interval ends before it starts.
    EndBeforeStart,
    /// Placed bookings differ from the input multiset.
    CoverageMismatch,
    /// A room's bookings are not start-ascending.
    OutOfOrder,
    /// Adjacent bookings in a room violate the endpoint policy.
    OverlapViolation,
    /// A plan contains a room with no bookings.
    EmptyRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates intervals before scheduling.
///
/// [`Interval::new`] already rejects `end < start`; this catches values
/// built through struct literals or deserialization, which bypass the
/// constructor. Reports every offending interval with its position.
pub fn validate_intervals(intervals: &[Interval]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, interval) in intervals.iter().enumerate() {
        if interval.end < interval.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::EndBeforeStart,
                format!(
                    "interval {idx} ends before it starts: {} < {}",
                    interval.end, interval.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies a plan against the input it was scheduled from.
///
/// Checks:
/// 1. No room is empty
/// 2. Each room's bookings are start-ascending
/// 3. Adjacent bookings in a room satisfy `policy`
/// 4. The placed multiset equals the input multiset (nothing lost,
///    duplicated, or altered)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn verify_plan(
    plan: &RoomPlan,
    input: &[Interval],
    policy: EndpointPolicy,
) -> ValidationResult {
    let mut errors = Vec::new();

    for (room_idx, room) in plan.rooms.iter().enumerate() {
        if room.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRoom,
                format!("room {room_idx} holds no bookings"),
            ));
            continue;
        }

        for pair in room.intervals.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfOrder,
                    format!(
                        "room {room_idx}: booking starting {} placed after one starting {}",
                        next.start, prev.start
                    ),
                ));
            }
            if !policy.allows(prev.end, next.start) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlapViolation,
                    format!(
                        "room {room_idx}: booking starting {} conflicts with previous end {}",
                        next.start, prev.end
                    ),
                ));
            }
        }
    }

    let mut counts: HashMap<(DateTime<Utc>, DateTime<Utc>), i64> = HashMap::new();
    for interval in input {
        *counts.entry((interval.start, interval.end)).or_insert(0) += 1;
    }
    for interval in plan.intervals() {
        *counts.entry((interval.start, interval.end)).or_insert(0) -= 1;
    }
    if counts.values().any(|&count| count != 0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::CoverageMismatch,
            "placed bookings differ from the input",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Room;
    use crate::scheduler::FirstFitScheduler;
    use crate::source::parse_timestamp;

    fn t(value: &str) -> DateTime<Utc> {
        parse_timestamp(value).unwrap()
    }

    fn iv(start: &str, end: &str) -> Interval {
        Interval::new(t(start), t(end)).unwrap()
    }

    #[test]
    fn test_valid_intervals() {
        let intervals = vec![
            iv("2018-08-01T08:00:00Z", "2018-08-01T09:00:00Z"),
            iv("2018-08-01T09:00:00Z", "2018-08-01T09:00:00Z"),
        ];
        assert!(validate_intervals(&intervals).is_ok());
    }

    #[test]
    fn test_malformed_interval_detected() {
        // Struct literal bypasses the checked constructor.
        let bad = Interval {
            start: t("2018-08-01T09:00:00Z"),
            end: t("2018-08-01T08:00:00Z"),
        };
        let intervals = vec![iv("2018-08-01T07:00:00Z", "2018-08-01T07:30:00Z"), bad];

        let errors = validate_intervals(&intervals).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EndBeforeStart);
        assert!(errors[0].message.contains("interval 1"));
    }

    #[test]
    fn test_malformed_interval_via_serde() {
        let json = r#"{"start":"2018-08-01T09:00:00Z","end":"2018-08-01T08:00:00Z"}"#;
        let bad: Interval = serde_json::from_str(json).unwrap();
        assert!(validate_intervals(&[bad]).is_err());
    }

    #[test]
    fn test_verify_scheduled_plan() {
        let bookings = vec![
            iv("2018-08-01T08:00:00Z", "2018-08-01T10:00:00Z"),
            iv("2018-08-01T08:30:00Z", "2018-08-01T09:30:00Z"),
            iv("2018-08-01T09:00:00Z", "2018-08-01T11:00:00Z"),
        ];
        let policy = EndpointPolicy::Exclusive;
        let plan = FirstFitScheduler::new(policy).schedule(&bookings);
        assert!(verify_plan(&plan, &bookings, policy).is_ok());
    }

    #[test]
    fn test_verify_detects_overlap() {
        let first = iv("2018-08-01T08:00:00Z", "2018-08-01T10:00:00Z");
        let second = iv("2018-08-01T09:00:00Z", "2018-08-01T11:00:00Z");
        let mut room = Room::with_first(first);
        room.push(second); // Overlaps the first booking.
        let plan = RoomPlan { rooms: vec![room] };

        let errors = verify_plan(&plan, &[first, second], EndpointPolicy::Exclusive).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlapViolation));
    }

    #[test]
    fn test_verify_detects_touching_under_exclusive() {
        let first = iv("2018-08-01T08:00:00Z", "2018-08-01T09:00:00Z");
        let second = iv("2018-08-01T09:00:00Z", "2018-08-01T10:00:00Z");
        let mut room = Room::with_first(first);
        room.push(second);
        let plan = RoomPlan { rooms: vec![room] };

        assert!(verify_plan(&plan, &[first, second], EndpointPolicy::Exclusive).is_err());
        assert!(verify_plan(&plan, &[first, second], EndpointPolicy::Shared).is_ok());
    }

    #[test]
    fn test_verify_detects_lost_booking() {
        let kept = iv("2018-08-01T08:00:00Z", "2018-08-01T09:00:00Z");
        let lost = iv("2018-08-01T10:00:00Z", "2018-08-01T11:00:00Z");
        let plan = RoomPlan {
            rooms: vec![Room::with_first(kept)],
        };

        let errors = verify_plan(&plan, &[kept, lost], EndpointPolicy::Exclusive).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CoverageMismatch));
    }

    #[test]
    fn test_verify_detects_duplicated_booking() {
        let booking = iv("2018-08-01T08:00:00Z", "2018-08-01T09:00:00Z");
        let plan = RoomPlan {
            rooms: vec![Room::with_first(booking), Room::with_first(booking)],
        };

        let errors = verify_plan(&plan, &[booking], EndpointPolicy::Exclusive).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CoverageMismatch));
    }

    #[test]
    fn test_verify_detects_out_of_order_room() {
        let early = iv("2018-08-01T08:00:00Z", "2018-08-01T09:00:00Z");
        let late = iv("2018-08-01T10:00:00Z", "2018-08-01T11:00:00Z");
        let mut room = Room::with_first(late);
        room.push(early);
        let plan = RoomPlan { rooms: vec![room] };

        let errors = verify_plan(&plan, &[early, late], EndpointPolicy::Exclusive).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutOfOrder));
    }

    #[test]
    fn test_verify_detects_empty_room() {
        let plan = RoomPlan {
            rooms: vec![Room::default()],
        };
        let errors = verify_plan(&plan, &[], EndpointPolicy::Exclusive).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyRoom);
    }

    #[test]
    fn test_verify_empty_plan_empty_input() {
        assert!(verify_plan(&RoomPlan::new(), &[], EndpointPolicy::Exclusive).is_ok());
    }
}
