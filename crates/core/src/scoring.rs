//! Scoring module - line clear points, level progression and gravity speed
//!
//! Classic scoring: a fixed base table multiplied by `(level + 1)`, with the
//! level taken before the lock's lines are counted. Hard drops add two points
//! per row travelled; soft drops add nothing.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_CELL, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points for clearing `lines` rows at `level`.
///
/// `lines` is at most 4 for any real lock; larger values score 0.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Points for a hard drop of `cells` rows.
pub fn hard_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
}

/// Level reached after `total_lines` cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level: `max(50, 1000 - level * 50)`.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}

/// Running score, line total, level and gravity interval of one game.
///
/// Every field only grows (the interval only shrinks) until the game restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
    }

    /// Account for a lock that cleared `cleared` rows. Returns the points awarded.
    pub fn record_lock(&mut self, cleared: usize) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);

        let level = level_for_lines(self.lines);
        if level > self.level {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
        }

        points
    }

    /// Account for a hard drop of `cells` rows. Returns the points awarded.
    pub fn record_hard_drop(&mut self, cells: u32) -> u32 {
        let points = hard_drop_score(cells);
        self.score = self.score.saturating_add(points);
        points
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
