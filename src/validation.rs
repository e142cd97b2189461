//! Structural integrity checks for a whole board.
//!
//! `try_place` maintains the board's invariants for states it built
//! itself; a board deserialized or assembled from external data has no
//! such guarantee. This audit detects:
//! - Duplicate lane IDs
//! - Duplicate task IDs (across the pool and all placements together,
//!   so a task present in both collections is also caught)
//! - Zero or negative durations
//! - Placements referencing unknown lanes
//! - Overlapping placements on one lane

use std::collections::HashSet;

use crate::board::ScheduleBoard;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two lanes share the same ID.
    DuplicateLaneId,
    /// Two tasks share the same ID, or one task is both queued and placed.
    DuplicateTaskId,
    /// A task or placement has a non-positive duration.
    ZeroDuration,
    /// A placement references a lane that doesn't exist.
    UnknownLane,
    /// Two placements on the same lane overlap.
    OverlappingPlacements,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a board.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_board<P>(board: &ScheduleBoard<P>) -> ValidationResult {
    let mut errors = Vec::new();

    // Lane IDs
    let mut lane_ids = HashSet::new();
    for lane in board.lanes() {
        if !lane_ids.insert(lane.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLaneId,
                format!("Duplicate lane ID: {}", lane.id),
            ));
        }
    }

    // Task IDs must be unique across the pool and placements together
    let mut task_ids = HashSet::new();
    for task in board.unscheduled() {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if task.duration_hours < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Task '{}' has non-positive duration", task.id),
            ));
        }
    }
    for placement in board.placements() {
        if !task_ids.insert(placement.task_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTaskId,
                format!("Duplicate task ID: {}", placement.task_id),
            ));
        }
        if placement.duration_hours < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Placement '{}' has non-positive duration", placement.task_id),
            ));
        }
        if !lane_ids.contains(placement.lane_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLane,
                format!(
                    "Placement '{}' references unknown lane '{}'",
                    placement.task_id, placement.lane_id
                ),
            ));
        }
    }

    // Pairwise overlap within each lane
    let placements = board.placements();
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            if a.lane_id == b.lane_id && a.span().overlaps(&b.span()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingPlacements,
                    format!(
                        "Placements '{}' and '{}' overlap on lane '{}'",
                        a.task_id, b.task_id, a.lane_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lane, Placement, PlanningWindow, Task};

    fn sample_board() -> ScheduleBoard<()> {
        ScheduleBoard::new(PlanningWindow::workday())
            .with_lane(Lane::new("line1"))
            .with_lane(Lane::new("line2"))
            .with_task(Task::new("A", 4, ()))
            .with_task(Task::new("B", 2, ()))
    }

    fn placement(task_id: &str, lane_id: &str, start_hour: i32, duration_hours: i32) -> Placement<()> {
        Placement {
            task_id: task_id.to_string(),
            lane_id: lane_id.to_string(),
            start_hour,
            duration_hours,
            payload: (),
        }
    }

    #[test]
    fn test_valid_board() {
        let mut board = sample_board();
        board.try_place("line1", 8, "A").unwrap();
        board.try_place("line1", 12, "B").unwrap();
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_duplicate_lane_id() {
        let board: ScheduleBoard<()> = ScheduleBoard::new(PlanningWindow::workday())
            .with_lane(Lane::new("line1"))
            .with_lane(Lane::new("line1"));

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateLaneId));
    }

    #[test]
    fn test_duplicate_task_id_in_pool() {
        let board = sample_board().with_task(Task::new("A", 3, ()));
        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTaskId));
    }

    #[test]
    fn test_task_in_both_collections() {
        // Hand-assembled board where "A" is queued and placed at once.
        let json = serde_json::json!({
            "window": { "start_hour": 8, "hours": 9 },
            "lanes": [{ "id": "line1", "name": "", "capacity": 0, "current_load": 0 }],
            "unscheduled": [{ "id": "A", "duration_hours": 4, "payload": null }],
            "placements": [{
                "task_id": "A", "lane_id": "line1",
                "start_hour": 8, "duration_hours": 4, "payload": null
            }]
        });
        let board: ScheduleBoard<()> = serde_json::from_value(json).unwrap();

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTaskId));
    }

    #[test]
    fn test_zero_duration() {
        let board = sample_board().with_task(Task::new("Z", 0, ()));
        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDuration));
    }

    #[test]
    fn test_unknown_lane_reference() {
        let json = serde_json::json!({
            "window": { "start_hour": 8, "hours": 9 },
            "lanes": [],
            "unscheduled": [],
            "placements": [{
                "task_id": "A", "lane_id": "ghost",
                "start_hour": 8, "duration_hours": 4, "payload": null
            }]
        });
        let board: ScheduleBoard<()> = serde_json::from_value(json).unwrap();

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownLane));
    }

    #[test]
    fn test_overlapping_placements() {
        let board_json = serde_json::json!({
            "window": { "start_hour": 8, "hours": 9 },
            "lanes": [{ "id": "line1", "name": "", "capacity": 0, "current_load": 0 }],
            "unscheduled": [],
            "placements": [
                serde_json::to_value(placement("A", "line1", 8, 4)).unwrap(),
                serde_json::to_value(placement("B", "line1", 10, 4)).unwrap(),
            ]
        });
        let board: ScheduleBoard<()> = serde_json::from_value(board_json).unwrap();

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlappingPlacements));
    }

    #[test]
    fn test_multiple_errors() {
        let board = sample_board()
            .with_lane(Lane::new("line1")) // duplicate
            .with_task(Task::new("Z", 0, ())); // zero duration

        let errors = validate_board(&board).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
