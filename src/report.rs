//! Plan reporting.
//!
//! Renders a finished [`RoomPlan`] as plain text: each room with its
//! bookings, then the room total. The scheduler itself never prints;
//! display lives here.

use std::io::{self, Write};

use crate::models::{Interval, RoomPlan};
use crate::source::TIME_FORMAT;

/// Formats a booking with the canonical timestamp format.
pub fn format_interval(interval: &Interval) -> String {
    format!(
        "{} - {}",
        interval.start.format(TIME_FORMAT),
        interval.end.format(TIME_FORMAT)
    )
}

/// Renders a plan report as a string.
///
/// ```text
/// Room 1:
///   2018-08-01T00:10:00Z - 2018-08-01T00:55:00Z
///   2018-08-01T01:20:00Z - 2018-08-01T01:45:00Z
/// Room 2:
///   2018-08-01T00:30:00Z - 2018-08-01T00:40:00Z
///
/// Minimum number of rooms: 2
/// ```
pub fn render_plan(plan: &RoomPlan) -> String {
    let mut out = String::new();
    for (idx, room) in plan.rooms.iter().enumerate() {
        out.push_str(&format!("Room {}:\n", idx + 1));
        for interval in &room.intervals {
            out.push_str(&format!("  {}\n", format_interval(interval)));
        }
    }
    if !plan.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("Minimum number of rooms: {}\n", plan.room_count()));
    out
}

/// Writes a plan report to `out`.
pub fn write_plan<W: Write>(plan: &RoomPlan, out: &mut W) -> io::Result<()> {
    out.write_all(render_plan(plan).as_bytes())
}
