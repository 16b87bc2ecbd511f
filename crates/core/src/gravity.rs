//! Fall timing - automatic downward steps and speed-up over time
//!
//! Everything is counted in ticks. Each playing tick first advances the elapsed
//! counter (possibly shortening the fall delay), then the fall counter.

use crate::types::{FALL_DELAY_STEP, INITIAL_FALL_DELAY, MIN_FALL_DELAY, SPEED_INCREASE_INTERVAL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallTimer {
    /// Playing ticks since game start
    elapsed_ticks: u64,
    /// Ticks between automatic falls
    fall_delay: u32,
    /// Ticks since the last automatic fall
    fall_counter: u32,
}

impl FallTimer {
    pub fn new() -> Self {
        Self {
            elapsed_ticks: 0,
            fall_delay: INITIAL_FALL_DELAY,
            fall_counter: 0,
        }
    }

    /// Back to the start-of-game cadence
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one tick. Returns true when the piece should fall one row.
    pub fn tick(&mut self) -> bool {
        self.elapsed_ticks += 1;
        if self.elapsed_ticks % SPEED_INCREASE_INTERVAL == 0 && self.fall_delay > MIN_FALL_DELAY {
            self.fall_delay = self
                .fall_delay
                .saturating_sub(FALL_DELAY_STEP)
                .max(MIN_FALL_DELAY);
        }

        self.fall_counter += 1;
        if self.fall_counter >= self.fall_delay {
            self.fall_counter = 0;
            return true;
        }
        false
    }

    pub fn fall_delay(&self) -> u32 {
        self.fall_delay
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn fall_counter(&self) -> u32 {
        self.fall_counter
    }
}

impl Default for FallTimer {
    fn default() -> Self {
        Self::new()
    }
}
