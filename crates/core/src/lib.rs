//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state: the grid, the piece catalog,
//! geometric transforms, collision, locking, scoring and the game state that
//! ties them together. It has **zero dependencies** on UI, timers or I/O, so:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: every rule is a plain function or method
//! - **Portable**: runs headless, in a terminal, or behind any other front-end
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 board of locked cells
//! - [`pieces`]: the seven shape templates and the active piece
//! - [`transform`]: translation, clockwise rotation and kick fallback
//! - [`collision`]: the legality predicate for every move
//! - [`lock`]: merging pieces and clearing full rows
//! - [`scoring`]: line clear points, levels and gravity intervals
//! - [`rng`]: seedable random source and piece generator
//! - [`game_state`]: the state object and its transitions
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Randomizer**: uniform over the seven kinds by default, optional 7-bag
//! - **Rotation**: clockwise only, with kicks `(-1,0) (1,0) (0,-1) (-2,0) (2,0)`
//! - **Scoring**: `[0, 40, 100, 300, 1200] × (level + 1)`, hard drop 2 per row
//! - **Levels**: one per 10 lines, gravity `max(50, 1000 - 50 × level)` ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, StepOutcome};
//! use blockfall_core::types::Phase;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.try_move(1, 0);
//! game.try_rotate();
//!
//! // Hard drop positions the piece; the next gravity step locks it.
//! let rows = game.hard_drop();
//! assert_eq!(game.score(), rows * 2);
//! assert!(game.gravity_step().locked());
//! ```
//!
//! # Timing
//!
//! Gravity is not driven here. The timing controller in `blockfall-engine`
//! calls [`GameState::gravity_step`] whenever its timer fires.

pub mod collision;
pub mod game_state;
pub mod grid;
pub mod lock;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod transform;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{collides, piece_collides};
pub use game_state::{GameState, StepOutcome};
pub use grid::Grid;
pub use lock::{clear_lines, clear_lines_detailed, merge, LineClear};
pub use pieces::{shape, spawn_position, Matrix, Piece, Shape};
pub use rng::{PieceGenerator, RandomSource, Randomizer, SimpleRng};
pub use scoring::{drop_interval_ms, hard_drop_score, level_for_lines, line_clear_score, Stats};
pub use snapshot::{GameSnapshot, NextSnapshot};
pub use transform::{rotate, translate, try_rotate};
