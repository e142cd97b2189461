//! In-memory scheduling board for interactive production planning.
//!
//! Models a planning screen for a manufacturing floor: a set of lanes
//! (production lines) sharing a discrete hourly window, a pool of
//! unscheduled tasks with whole-hour durations, and a placement operation
//! that commits a task onto a lane iff the resulting time interval does
//! not collide with work already scheduled there.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Lane`, `Task`, `Placement`, `HourSpan`,
//!   `PlanningWindow`, `ProductOrder`
//! - **`board`**: `ScheduleBoard` (placement, conflict detection, slot
//!   suggestion), block geometry, KPIs, commitment notices
//! - **`materials`**: Material availability status for pending runs
//! - **`clock`**: Elapsed-shift clock formatting
//! - **`validation`**: Structural integrity checks for a whole board
//!
//! # Architecture
//!
//! The crate is the state-and-rules core only. It performs no I/O, holds
//! no timers, and renders nothing; a presentation layer owns the event
//! loop and calls in with lane ids, start hours, and task ids. All
//! failures are returned as typed values for the caller to surface.

pub mod board;
pub mod clock;
pub mod materials;
pub mod models;
pub mod validation;
