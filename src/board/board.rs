//! Interval placement with conflict detection.
//!
//! # Algorithm
//!
//! A placement attempt builds the candidate half-open span
//! `[start_hour, start_hour + duration)` and scans the target lane's
//! existing placements for an overlap. Any overlap rejects the attempt
//! with no state change; otherwise the task moves atomically from the
//! unscheduled pool into a new placement on that lane.
//!
//! # Window bound
//!
//! `try_place` does not bound the candidate to the visible window: a run
//! may start on the last slot hour and extend past the window's end, and
//! the stored interval stays unclamped for later overlap checks. Only
//! rendering truncates (see [`block_geometry`](super::block_geometry)).
//! Slot suggestion, in contrast, only proposes runs that fit entirely
//! inside the window.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{HourSpan, Lane, Placement, PlanningWindow, Task};

/// Why a placement attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The candidate span overlaps an existing placement on the lane.
    /// The task stays in the unscheduled pool and may be retried at
    /// another hour or lane.
    SlotUnavailable {
        /// Task already occupying the slot.
        conflicting_task: String,
        /// Hours that placement occupies.
        occupied: HourSpan,
    },
    /// No lane with this identifier exists on the board.
    UnknownLane(String),
    /// No task with this identifier is in the unscheduled pool.
    UnknownTask(String),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotUnavailable {
                conflicting_task,
                occupied,
            } => write!(
                f,
                "slot unavailable: hours [{}, {}) are held by task '{}'",
                occupied.start, occupied.end, conflicting_task
            ),
            Self::UnknownLane(id) => write!(f, "unknown lane '{id}'"),
            Self::UnknownTask(id) => write!(f, "unknown task '{id}'"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Where a task currently lives on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskLocation {
    /// In the unscheduled pool.
    Queued,
    /// Committed to a lane.
    Placed {
        /// Owning lane identifier.
        lane_id: String,
    },
}

/// The planning board: lanes, unscheduled pool, and placements.
///
/// Generic over the task payload type `P`, which the board carries but
/// never inspects.
///
/// # Example
///
/// ```
/// use lineboard::board::ScheduleBoard;
/// use lineboard::models::{Lane, PlanningWindow, Task};
///
/// let mut board = ScheduleBoard::new(PlanningWindow::workday())
///     .with_lane(Lane::new("line1").with_name("Production Line 1"))
///     .with_task(Task::new("PR-001", 4, "Amoxicillin 500mg Capsules"));
///
/// let placement = board.try_place("line1", 8, "PR-001").unwrap();
/// assert_eq!(placement.span().end, 12);
/// assert!(board.unscheduled().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBoard<P> {
    window: PlanningWindow,
    lanes: Vec<Lane>,
    unscheduled: Vec<Task<P>>,
    placements: Vec<Placement<P>>,
}

impl<P> ScheduleBoard<P> {
    /// Creates an empty board over the given window.
    pub fn new(window: PlanningWindow) -> Self {
        Self {
            window,
            lanes: Vec::new(),
            unscheduled: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Adds a lane.
    pub fn with_lane(mut self, lane: Lane) -> Self {
        self.lanes.push(lane);
        self
    }

    /// Seeds a task into the unscheduled pool.
    pub fn with_task(mut self, task: Task<P>) -> Self {
        self.unscheduled.push(task);
        self
    }

    /// Appends a task to the unscheduled pool after construction
    /// (e.g. a request forwarded from another screen).
    pub fn enqueue(&mut self, task: Task<P>) {
        self.unscheduled.push(task);
    }

    /// The board's visible window.
    pub fn window(&self) -> PlanningWindow {
        self.window
    }

    /// All lanes in declaration order.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Looks up a lane by id.
    pub fn lane(&self, lane_id: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.id == lane_id)
    }

    /// Tasks still awaiting placement, in pool order.
    pub fn unscheduled(&self) -> &[Task<P>] {
        &self.unscheduled
    }

    /// All committed placements, in placement order.
    pub fn placements(&self) -> &[Placement<P>] {
        &self.placements
    }

    /// Placements on one lane.
    pub fn placements_for_lane(&self, lane_id: &str) -> Vec<&Placement<P>> {
        self.placements
            .iter()
            .filter(|p| p.lane_id == lane_id)
            .collect()
    }

    /// Finds which collection holds a task, if any.
    pub fn locate(&self, task_id: &str) -> Option<TaskLocation> {
        if self.unscheduled.iter().any(|t| t.id == task_id) {
            return Some(TaskLocation::Queued);
        }
        self.placements
            .iter()
            .find(|p| p.task_id == task_id)
            .map(|p| TaskLocation::Placed {
                lane_id: p.lane_id.clone(),
            })
    }

    /// The first placement on `lane_id` overlapping `candidate`, if any.
    ///
    /// Pure pre-check; does not mutate the board.
    pub fn conflict_for(&self, lane_id: &str, candidate: HourSpan) -> Option<&Placement<P>> {
        self.placements
            .iter()
            .find(|p| p.lane_id == lane_id && p.span().overlaps(&candidate))
    }

    /// Attempts to place an unscheduled task on a lane at a start hour.
    ///
    /// The task is found by identifier lookup in the unscheduled pool;
    /// its stored duration defines the candidate span. On success the
    /// task moves atomically out of the pool and the new placement is
    /// returned. On any error the board is unchanged and the task stays
    /// available for retry.
    pub fn try_place(
        &mut self,
        lane_id: &str,
        start_hour: i32,
        task_id: &str,
    ) -> Result<&Placement<P>, PlacementError> {
        if self.lane(lane_id).is_none() {
            return Err(PlacementError::UnknownLane(lane_id.to_string()));
        }
        let task_idx = self
            .unscheduled
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| PlacementError::UnknownTask(task_id.to_string()))?;

        let candidate = self.unscheduled[task_idx].candidate_span(start_hour);
        if let Some(existing) = self.conflict_for(lane_id, candidate) {
            return Err(PlacementError::SlotUnavailable {
                conflicting_task: existing.task_id.clone(),
                occupied: existing.span(),
            });
        }

        let task = self.unscheduled.remove(task_idx);
        self.placements.push(Placement {
            task_id: task.id,
            lane_id: lane_id.to_string(),
            start_hour,
            duration_hours: task.duration_hours,
            payload: task.payload,
        });
        let idx = self.placements.len() - 1;
        Ok(&self.placements[idx])
    }

    /// Earliest start hour on a lane where a run of `duration_hours`
    /// fits without conflict and without spilling past the window.
    ///
    /// Returns `None` for an unknown lane or a full lane.
    pub fn suggest_start(&self, lane_id: &str, duration_hours: i32) -> Option<i32> {
        self.lane(lane_id)?;
        self.window.slot_hours().find(|&hour| {
            hour + duration_hours <= self.window.end_hour()
                && self
                    .conflict_for(lane_id, HourSpan::from_start(hour, duration_hours))
                    .is_none()
        })
    }

    /// Earliest in-window slot across all lanes for a run of
    /// `duration_hours`. Lane declaration order breaks hour ties.
    pub fn earliest_slot(&self, duration_hours: i32) -> Option<(&str, i32)> {
        let mut best: Option<(&str, i32)> = None;
        for lane in &self.lanes {
            if let Some(hour) = self.suggest_start(&lane.id, duration_hours) {
                match best {
                    Some((_, best_hour)) if best_hour <= hour => {}
                    _ => best = Some((lane.id.as_str(), hour)),
                }
            }
        }
        best
    }
}
