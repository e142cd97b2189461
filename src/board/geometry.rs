//! Block geometry for proportional timeline rendering.
//!
//! Converts a placement's hours into fractional offsets within the
//! visible window so a presentation layer can position a block without
//! knowing the window bounds. Purely arithmetic; no board state.

use serde::{Deserialize, Serialize};

use crate::models::PlanningWindow;

/// Fractional position of a block inside the window.
///
/// Both fields are in `0.0..=1.0` and `left + width <= 1.0` always
/// holds: a run extending past the window's last hour renders truncated
/// at the right edge rather than overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    /// Offset of the block's left edge as a fraction of the window.
    pub left: f64,
    /// Width of the block as a fraction of the window.
    pub width: f64,
}

/// Computes the fractional geometry of a run within the window.
///
/// `left` is `(start_hour - window.start_hour) / window.hours`, clamped
/// into `0.0..=1.0`; `width` is `duration_hours / window.hours`,
/// truncated so the block ends at the window's right edge. A window
/// with no hours yields a zero-size block.
pub fn block_geometry(
    start_hour: i32,
    duration_hours: i32,
    window: &PlanningWindow,
) -> BlockGeometry {
    if window.hours <= 0 {
        return BlockGeometry {
            left: 0.0,
            width: 0.0,
        };
    }
    let hours = f64::from(window.hours);
    let left = (f64::from(start_hour - window.start_hour) / hours).clamp(0.0, 1.0);
    let width = (f64::from(duration_hours) / hours)
        .max(0.0)
        .min(1.0 - left);
    BlockGeometry { left, width }
}
