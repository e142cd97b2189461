//! Material availability for pending runs.
//!
//! Before a run is committed the planner reviews whether raw materials
//! cover the requirement. Status is derived from the stock figures, and
//! `coverage` feeds the availability bar.

use serde::{Deserialize, Serialize};

/// Stock position of one raw material against a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialAvailability {
    /// Material name.
    pub material: String,
    /// Units on hand.
    pub available: u64,
    /// Units the run requires.
    pub required: u64,
    /// Expected restock date (ISO date string) when short.
    pub expected_date: Option<String>,
}

/// Derived availability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialStatus {
    /// Stock covers the full requirement.
    Available,
    /// Some stock, not enough.
    Partial,
    /// Nothing on hand.
    Unavailable,
}

impl MaterialAvailability {
    /// Creates a stock position.
    pub fn new(material: impl Into<String>, available: u64, required: u64) -> Self {
        Self {
            material: material.into(),
            available,
            required,
            expected_date: None,
        }
    }

    /// Sets the expected restock date.
    pub fn with_expected_date(mut self, date: impl Into<String>) -> Self {
        self.expected_date = Some(date.into());
        self
    }

    /// Classifies the stock position.
    pub fn status(&self) -> MaterialStatus {
        if self.available >= self.required {
            MaterialStatus::Available
        } else if self.available > 0 {
            MaterialStatus::Partial
        } else {
            MaterialStatus::Unavailable
        }
    }

    /// Covered fraction of the requirement, clamped to 1.0.
    ///
    /// A zero requirement counts as fully covered.
    pub fn coverage(&self) -> f64 {
        if self.required == 0 {
            return 1.0;
        }
        (self.available as f64 / self.required as f64).min(1.0)
    }

    /// Units still missing.
    pub fn shortfall(&self) -> u64 {
        self.required.saturating_sub(self.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available() {
        let m = MaterialAvailability::new("Raw Material B", 3000, 3000);
        assert_eq!(m.status(), MaterialStatus::Available);
        assert!((m.coverage() - 1.0).abs() < 1e-10);
        assert_eq!(m.shortfall(), 0);
    }

    #[test]
    fn test_partial() {
        let m = MaterialAvailability::new("Raw Material A", 5000, 8000)
            .with_expected_date("2024-04-01");
        assert_eq!(m.status(), MaterialStatus::Partial);
        assert!((m.coverage() - 0.625).abs() < 1e-10);
        assert_eq!(m.shortfall(), 3000);
        assert_eq!(m.expected_date.as_deref(), Some("2024-04-01"));
    }

    #[test]
    fn test_unavailable() {
        let m = MaterialAvailability::new("Excipient X", 0, 400);
        assert_eq!(m.status(), MaterialStatus::Unavailable);
        assert!((m.coverage() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_surplus_clamps_coverage() {
        let m = MaterialAvailability::new("Raw Material C", 9000, 3000);
        assert!((m.coverage() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_requirement() {
        let m = MaterialAvailability::new("Unused", 0, 0);
        assert_eq!(m.status(), MaterialStatus::Available);
        assert!((m.coverage() - 1.0).abs() < 1e-10);
    }
}
