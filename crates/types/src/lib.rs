//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the rules crate, the timing controller and the terminal front-end alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POLL_MS` | 50 | Controller polling period |
//! | `BASE_DROP_MS` | 1000 | Gravity at level 0 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Gravity floor |
//! | `HARD_DROP_LOCK_MS` | 50 | Delay of the deferred lock after a hard drop |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Phase, PieceKind, COLS, ROWS};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color_id(), 3);
//! assert_eq!(PieceKind::from_color_id(3), Some(PieceKind::T));
//!
//! assert!(Phase::Playing.accepts_moves());
//! assert!(!Phase::GameOver.accepts_pause_toggle());
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const COLS: usize = 10;

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Value of an empty grid cell.
pub const EMPTY: u8 = 0;

/// Default controller polling period in milliseconds.
pub const POLL_MS: u32 = 50;

/// Base gravity interval at level 0 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level.
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this.
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Controller time between a hard drop and its deferred lock step.
pub const HARD_DROP_LOCK_MS: u32 = 50;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row travelled by a hard drop.
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Offsets tried, in order, when an in-place rotation collides.
pub const KICK_OFFSETS: [(i8, i8); 5] = [(-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0)];

/// The seven tetromino piece kinds
///
/// Each kind has a stable color id, which is also the value its cells carry
/// once locked into the grid:
/// - **I** (1): cyan, horizontal bar
/// - **O** (2): yellow, 2x2 square
/// - **T** (3): purple, T-shaped
/// - **S** (4): green, S-shaped
/// - **Z** (5): red, Z-shaped
/// - **J** (6): blue, J-shaped
/// - **L** (7): orange, L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of distinct kinds.
    pub const LEN: usize = 7;

    /// Color id written into the grid for this kind (1..=7).
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]. Returns `None` for `0` and out-of-range values.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Game lifecycle phase.
///
/// `Playing ⇄ Paused`, `Playing → GameOver`. Only a restart leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    /// Whether movement, rotation, drops and gravity are processed.
    pub fn accepts_moves(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Whether a pause toggle is honoured.
    pub fn accepts_pause_toggle(&self) -> bool {
        !matches!(self, Phase::GameOver)
    }
}

/// Discrete input actions accepted by the engine
///
/// Every other input is ignored by the front-end before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (with kick fallback)
    RotateCw,
    /// One gravity step on demand
    SoftDrop,
    /// Fall to the lowest legal row, then lock
    HardDrop,
    /// Toggle between playing and paused
    PauseToggle,
    /// Start a new game
    Restart,
}

/// Top-left board offset of a piece's matrix.
///
/// `y` may be negative while part of a piece is above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(POLL_MS, 50);
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 50);
        assert_eq!(DROP_INTERVAL_MIN_MS, 50);
        assert_eq!(HARD_DROP_LOCK_MS, 50);
    }

    #[test]
    fn color_ids_round_trip_through_kinds() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.color_id() as usize, i + 1);
            assert_eq!(PieceKind::from_color_id(kind.color_id()), Some(*kind));
        }
        assert_eq!(PieceKind::from_color_id(0), None);
        assert_eq!(PieceKind::from_color_id(8), None);
    }

    #[test]
    fn phase_predicates() {
        assert!(Phase::Playing.accepts_moves());
        assert!(!Phase::Paused.accepts_moves());
        assert!(!Phase::GameOver.accepts_moves());

        assert!(Phase::Playing.accepts_pause_toggle());
        assert!(Phase::Paused.accepts_pause_toggle());
        assert!(!Phase::GameOver.accepts_pause_toggle());
    }
}
