//! Snapshot module - the read-only view handed to renderers
//!
//! A snapshot is a plain `Copy` value: the locked board with the active piece
//! drawn in, the look-ahead piece, the phase and the running stats.

use crate::pieces::{Matrix, Piece};
use crate::scoring::Stats;
use crate::types::{PieceKind, Phase, COLS, EMPTY, ROWS};

/// Look-ahead piece as shown in the preview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
}

impl From<Piece> for NextSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
        }
    }
}

/// Read-only view of a game, recomputed after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the active piece drawn on top.
    pub board: [[u8; COLS]; ROWS],
    pub next: Option<NextSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Draw `piece` over the board, skipping cells above or outside it.
    pub(crate) fn overlay(&mut self, piece: &Piece) {
        for (x, y, v) in piece.cells() {
            if x >= 0 && x < COLS as i32 && y >= 0 && y < ROWS as i32 {
                self.board[y as usize][x as usize] = v;
            }
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let stats = Stats::new();
        Self {
            board: [[EMPTY; COLS]; ROWS],
            next: None,
            phase: Phase::Playing,
            score: stats.score,
            lines: stats.lines,
            level: stats.level,
            drop_interval_ms: stats.drop_interval_ms,
        }
    }
}
