//! Minimum-room booking scheduler.
//!
//! Computes, for a static set of booking intervals, the minimum number of
//! rooms needed so that no two bookings in the same room overlap, together
//! with the concrete room assignment. Whether back-to-back bookings may
//! share a room is governed by [`models::EndpointPolicy`].
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `EndpointPolicy`, `Room`, `RoomPlan`
//! - **`scheduler`**: `FirstFitScheduler` (greedy core) and `PlanStats` (plan metrics)
//! - **`validation`**: Interval integrity checks and plan verification
//! - **`source`**: Booking producers — random generation and delimited files
//! - **`report`**: Plain-text rendering of a finished plan
//!
//! # Architecture
//!
//! The scheduler is a pure function from bookings to a room plan: sources
//! produce intervals, the scheduler assigns them, reporting displays the
//! result. Nothing below `source` and `report` performs I/O.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (interval partitioning)
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs" (interval graphs)

pub mod models;
pub mod report;
pub mod scheduler;
pub mod source;
pub mod validation;
