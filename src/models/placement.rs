//! Placement (scheduled work) model.
//!
//! A placement records that a task occupies `[start_hour,
//! start_hour + duration_hours)` on one lane. Placements are committed
//! by [`ScheduleBoard::try_place`](crate::board::ScheduleBoard::try_place)
//! and never edited or removed afterwards.

use serde::{Deserialize, Serialize};

use super::HourSpan;

/// A task committed to a lane at a start hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement<P> {
    /// Identifier of the placed task.
    pub task_id: String,
    /// Owning lane identifier.
    pub lane_id: String,
    /// First occupied hour.
    pub start_hour: i32,
    /// Run length in whole hours.
    pub duration_hours: i32,
    /// Payload carried over from the task.
    pub payload: P,
}

impl<P> Placement<P> {
    /// The occupied span `[start_hour, start_hour + duration_hours)`.
    #[inline]
    pub fn span(&self) -> HourSpan {
        HourSpan::from_start(self.start_hour, self.duration_hours)
    }

    /// First free hour after this placement.
    #[inline]
    pub fn end_hour(&self) -> i32 {
        self.start_hour + self.duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_span() {
        let p = Placement {
            task_id: "PR-001".to_string(),
            lane_id: "line1".to_string(),
            start_hour: 8,
            duration_hours: 4,
            payload: (),
        };
        assert_eq!(p.span(), HourSpan::new(8, 12));
        assert_eq!(p.end_hour(), 12);
    }
}
