//! Scheduling board domain models.
//!
//! Core data types for the planning board: time spans, the visible
//! window, lanes, tasks awaiting placement, and committed placements.
//!
//! # Board Vocabulary
//!
//! | Type | On the floor |
//! |------|--------------|
//! | Lane | Production line |
//! | Task | Pending production request |
//! | Placement | Scheduled production run |
//! | PlanningWindow | Visible shift window |

mod lane;
mod order;
mod placement;
mod span;
mod task;
mod window;

pub use lane::{Lane, LoadLevel};
pub use order::{queue_order, Priority, ProductOrder};
pub use placement::Placement;
pub use span::HourSpan;
pub use task::Task;
pub use window::PlanningWindow;
