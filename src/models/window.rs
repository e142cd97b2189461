//! The visible planning window.
//!
//! A board renders one contiguous stretch of hours as a grid of discrete
//! slots. The standard floor configuration is the 08:00–17:00 workday,
//! nine slot hours.

use serde::{Deserialize, Serialize};

use super::HourSpan;

/// The hourly grid a board renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    /// First visible hour.
    pub start_hour: i32,
    /// Number of visible hours.
    pub hours: i32,
}

impl PlanningWindow {
    /// Creates a window starting at `start_hour` spanning `hours` hours.
    pub fn new(start_hour: i32, hours: i32) -> Self {
        Self { start_hour, hours }
    }

    /// The standard 08:00–17:00 workday window.
    pub fn workday() -> Self {
        Self::new(8, 9)
    }

    /// First hour past the window.
    #[inline]
    pub fn end_hour(&self) -> i32 {
        self.start_hour + self.hours
    }

    /// The window as a span.
    #[inline]
    pub fn span(&self) -> HourSpan {
        HourSpan::new(self.start_hour, self.end_hour())
    }

    /// Whether an hour is a visible slot hour.
    pub fn contains_hour(&self, hour: i32) -> bool {
        self.span().contains(hour)
    }

    /// Iterates the candidate start hours, earliest first.
    pub fn slot_hours(&self) -> impl Iterator<Item = i32> {
        self.start_hour..self.end_hour()
    }
}

impl Default for PlanningWindow {
    fn default() -> Self {
        Self::workday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workday_window() {
        let w = PlanningWindow::workday();
        assert_eq!(w.start_hour, 8);
        assert_eq!(w.hours, 9);
        assert_eq!(w.end_hour(), 17);
    }

    #[test]
    fn test_slot_hours() {
        let w = PlanningWindow::workday();
        let slots: Vec<i32> = w.slot_hours().collect();
        assert_eq!(slots.len(), 9);
        assert_eq!(slots.first(), Some(&8));
        assert_eq!(slots.last(), Some(&16));
    }

    #[test]
    fn test_contains_hour() {
        let w = PlanningWindow::workday();
        assert!(w.contains_hour(8));
        assert!(w.contains_hour(16));
        assert!(!w.contains_hour(17));
        assert!(!w.contains_hour(7));
    }
}
