//! Greedy room assignment and plan metrics.
//!
//! `FirstFitScheduler` implements interval partitioning with a first-fit
//! scan; `PlanStats` computes quality metrics from a finished plan.
//!
//! # Algorithm
//!
//! Bookings are processed start-ascending; each one goes to the first room
//! it fits into, and a new room opens when none fits. With that ordering the
//! greedy room count matches the maximum number of simultaneously active
//! bookings, which is the true minimum.
//!
//! # Reference
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (interval partitioning)

mod first_fit;
mod stats;

pub use first_fit::FirstFitScheduler;
pub use stats::PlanStats;
