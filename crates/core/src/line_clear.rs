//! Line clear animation timer
//!
//! Holds the rows found full by the last lock and counts ticks until they are
//! removed. The rows stay full for the whole animation: no lock happens while it
//! runs.

use crate::board::RowList;
use crate::types::{FLASH_PERIOD, LINE_CLEAR_ANIMATION_TICKS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    rows: RowList,
    timer: u32,
}

impl LineClear {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating `rows` from phase 0
    pub fn start(&mut self, rows: RowList) {
        self.rows = rows;
        self.timer = 0;
    }

    /// Advance one tick. Returns true once the animation has run its course.
    pub fn tick(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.timer += 1;
        self.timer > LINE_CLEAR_ANIMATION_TICKS
    }

    /// Hand the pending rows over for removal and go idle
    pub fn finish(&mut self) -> RowList {
        self.timer = 0;
        std::mem::take(&mut self.rows)
    }

    pub fn reset(&mut self) {
        self.rows.clear();
        self.timer = 0;
    }

    pub fn is_active(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Ticks since the animation started
    pub fn phase(&self) -> u32 {
        self.timer
    }

    /// Whether pending rows are highlighted in the current phase
    pub fn flash_on(&self) -> bool {
        self.is_active() && self.timer % FLASH_PERIOD < FLASH_PERIOD / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(list: &[usize]) -> RowList {
        list.iter().copied().collect()
    }

    #[test]
    fn test_idle_never_expires() {
        let mut clear = LineClear::new();
        for _ in 0..100 {
            assert!(!clear.tick());
        }
    }

    #[test]
    fn test_expires_after_animation_ticks() {
        let mut clear = LineClear::new();
        clear.start(rows(&[21]));

        for _ in 0..LINE_CLEAR_ANIMATION_TICKS {
            assert!(!clear.tick());
        }
        assert!(clear.tick());
        assert_eq!(clear.finish().as_slice(), &[21]);
        assert!(!clear.is_active());
        assert_eq!(clear.phase(), 0);
    }

    #[test]
    fn test_flash_phase() {
        let mut clear = LineClear::new();
        clear.start(rows(&[3, 2]));
        assert!(clear.flash_on());
        for _ in 0..5 {
            clear.tick();
        }
        assert!(!clear.flash_on());
        for _ in 0..5 {
            clear.tick();
        }
        assert!(clear.flash_on());
    }
}
