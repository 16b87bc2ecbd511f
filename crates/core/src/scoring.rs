//! Scoring module - line clear points
//!
//! Clearing `k` rows at once is worth `100 * 2^(k-1)`: 100, 200, 400 and 800 for
//! one to four rows. Nothing else scores.

use crate::types::LINE_CLEAR_BASE_SCORE;

/// Points for clearing `lines` rows simultaneously (0 for no rows)
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    u32::try_from(lines - 1)
        .ok()
        .and_then(|shift| 1u32.checked_shl(shift))
        .map_or(u32::MAX, |factor| LINE_CLEAR_BASE_SCORE.saturating_mul(factor))
}
