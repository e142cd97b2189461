//! Elapsed-shift clock.
//!
//! A running batch displays the time elapsed since its start as
//! `HH:MM:SS`, recomputed from the fixed start timestamp on every tick.
//! The clock here is pure arithmetic over millisecond timestamps; the
//! once-per-second tick belongs to the caller and can be dropped at any
//! time without touching board state.

use serde::{Deserialize, Serialize};

/// Elapsed time tracker anchored to a fixed start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedClock {
    /// Start timestamp (ms).
    pub start_ms: i64,
}

impl ElapsedClock {
    /// Creates a clock anchored at `start_ms`.
    pub fn started_at(start_ms: i64) -> Self {
        Self { start_ms }
    }

    /// Milliseconds elapsed at `now_ms`, saturating at zero.
    pub fn elapsed_ms(&self, now_ms: i64) -> i64 {
        (now_ms - self.start_ms).max(0)
    }

    /// Elapsed time at `now_ms` formatted as `HH:MM:SS`.
    pub fn display(&self, now_ms: i64) -> String {
        format_elapsed(self.elapsed_ms(now_ms))
    }
}

/// Formats a millisecond duration as zero-padded `HH:MM:SS`.
pub fn format_elapsed(elapsed_ms: i64) -> String {
    let hours = elapsed_ms / (1000 * 60 * 60);
    let minutes = (elapsed_ms % (1000 * 60 * 60)) / (1000 * 60);
    let seconds = (elapsed_ms % (1000 * 60)) / 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
