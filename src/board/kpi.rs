//! Board utilization metrics.
//!
//! Computes occupancy indicators from a board's current placements.
//! Utilization counts only hours visible in the planning window, so a
//! run overflowing the window edge contributes its visible portion.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use super::ScheduleBoard;

/// Occupancy indicators for a board.
#[derive(Debug, Clone)]
pub struct BoardKpi {
    /// Committed placements.
    pub placed_count: usize,
    /// Tasks still in the unscheduled pool.
    pub unscheduled_count: usize,
    /// Window-visible scheduled hours summed across all lanes.
    pub scheduled_hours: i64,
    /// Per-lane utilization (0.0..=1.0). Every lane is present, empty
    /// lanes at 0.0.
    pub utilization_by_lane: HashMap<String, f64>,
    /// Mean utilization across lanes (0.0 when the board has no lanes).
    pub avg_utilization: f64,
}

impl BoardKpi {
    /// Computes KPIs from the board's current state.
    pub fn calculate<P>(board: &ScheduleBoard<P>) -> Self {
        let window_span = board.window().span();
        let window_hours = board.window().hours;

        let mut utilization_by_lane: HashMap<String, f64> = HashMap::new();
        let mut scheduled_hours: i64 = 0;

        for lane in board.lanes() {
            let busy: i64 = board
                .placements_for_lane(&lane.id)
                .iter()
                .filter_map(|p| p.span().clamp_to(&window_span))
                .map(|s| i64::from(s.duration()))
                .sum();
            scheduled_hours += busy;

            let utilization = if window_hours > 0 {
                busy as f64 / f64::from(window_hours)
            } else {
                0.0
            };
            utilization_by_lane.insert(lane.id.clone(), utilization);
        }

        let avg_utilization = if utilization_by_lane.is_empty() {
            0.0
        } else {
            utilization_by_lane.values().sum::<f64>() / utilization_by_lane.len() as f64
        };

        Self {
            placed_count: board.placements().len(),
            unscheduled_count: board.unscheduled().len(),
            scheduled_hours,
            utilization_by_lane,
            avg_utilization,
        }
    }
}
