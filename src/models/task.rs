//! Task (unscheduled work) model.
//!
//! A task is a unit of work waiting in the board's unscheduled pool:
//! an identifier, a whole-hour duration, and an opaque payload the
//! scheduler never inspects. Placement consumes the task and produces
//! a [`Placement`](super::Placement); there is no reverse transition.

use serde::{Deserialize, Serialize};

use super::HourSpan;

/// A unit of work awaiting placement on a lane.
///
/// Generic over the payload type `P`; the board moves the payload
/// around without reading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task<P> {
    /// Unique task identifier.
    pub id: String,
    /// Run length in whole hours. Must be positive.
    pub duration_hours: i32,
    /// Caller-defined payload.
    pub payload: P,
}

impl<P> Task<P> {
    /// Creates a new task.
    pub fn new(id: impl Into<String>, duration_hours: i32, payload: P) -> Self {
        Self {
            id: id.into(),
            duration_hours,
            payload,
        }
    }

    /// The span this task would occupy if started at `start_hour`.
    pub fn candidate_span(&self, start_hour: i32) -> HourSpan {
        HourSpan::from_start(start_hour, self.duration_hours)
    }
}
