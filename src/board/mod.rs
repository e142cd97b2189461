//! The schedule board and its derived views.
//!
//! `ScheduleBoard` owns the planning state: lanes, the unscheduled pool,
//! and committed placements. Placement is the one mutating operation;
//! everything else here is a pure view over the board: block geometry
//! for rendering, KPIs, and commitment notices.

mod board;
mod commitment;
mod geometry;
mod kpi;

pub use board::{PlacementError, ScheduleBoard, TaskLocation};
pub use commitment::CommitmentNotice;
pub use geometry::{block_geometry, BlockGeometry};
pub use kpi::BoardKpi;
