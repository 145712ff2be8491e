//! Scheduling domain models.
//!
//! Core data types for booking intervals and room assignments. The terms
//! are booking-flavored but the model is generic interval partitioning:
//!
//! | roomier | Meetings | Healthcare | Compute |
//! |---------|----------|------------|---------|
//! | Interval | Booking | Appointment | Job |
//! | Room | Meeting room | Exam room | Worker |
//! | RoomPlan | Room schedule | Clinic plan | Machine allocation |

mod interval;
mod policy;
mod room;

pub use interval::{Interval, IntervalError};
pub use policy::EndpointPolicy;
pub use room::{Room, RoomPlan};
