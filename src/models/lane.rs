//! Lane (production line) model.
//!
//! A lane is a schedulable resource track with its own timeline on the
//! board. Lanes also carry a unit-based load indicator (current output
//! commitment vs. rated capacity) that is independent of the hourly
//! placements; it drives the load badge next to the lane name.

use serde::{Deserialize, Serialize};

/// A production line the board can place work on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    /// Unique lane identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Rated output capacity in units.
    pub capacity: u32,
    /// Currently committed output in units.
    pub current_load: u32,
}

/// Load badge classification for a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadLevel {
    /// Load at or below 50% of capacity.
    Normal,
    /// Load above 50% of capacity.
    Elevated,
    /// Load above 80% of capacity.
    High,
}

impl Lane {
    /// Creates a new lane with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            current_load: 0,
        }
    }

    /// Sets the lane name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the rated capacity in units.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the committed load in units.
    pub fn with_load(mut self, current_load: u32) -> Self {
        self.current_load = current_load;
        self
    }

    /// Load as a fraction of capacity.
    ///
    /// Returns 0.0 for a zero-capacity lane. Not clamped: an
    /// over-committed lane reports a ratio above 1.0.
    pub fn load_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.current_load) / f64::from(self.capacity)
    }

    /// Load as a rounded percentage for display.
    pub fn load_percent(&self) -> u32 {
        (self.load_ratio() * 100.0).round() as u32
    }

    /// Badge classification at the 50%/80% thresholds.
    pub fn load_level(&self) -> LoadLevel {
        let ratio = self.load_ratio();
        if ratio > 0.8 {
            LoadLevel::High
        } else if ratio > 0.5 {
            LoadLevel::Elevated
        } else {
            LoadLevel::Normal
        }
    }
}
