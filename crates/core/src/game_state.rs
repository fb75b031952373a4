//! Game state module - the single owner of grid, pieces, score and phase
//!
//! Every transition follows the same discipline: compute a candidate, check it
//! with the collision predicate, then commit it in one assignment or leave the
//! state untouched. Legality of each transition depends only on the current
//! [`Phase`].

use crate::collision::piece_collides;
use crate::grid::Grid;
use crate::lock::{clear_lines_detailed, merge};
use crate::pieces::Piece;
use crate::rng::{PieceGenerator, RandomSource, SimpleRng};
use crate::scoring::Stats;
use crate::snapshot::{GameSnapshot, NextSnapshot};
use crate::transform::{translate, try_rotate};
use crate::types::Phase;

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not playing; nothing changed.
    Ignored,
    /// The piece fell one row.
    Moved,
    /// The piece locked and the next piece spawned.
    Locked { lines: usize, points: u32 },
    /// The piece locked but the next piece could not spawn.
    ToppedOut { lines: usize, points: u32 },
}

impl StepOutcome {
    pub fn locked(&self) -> bool {
        matches!(
            self,
            StepOutcome::Locked { .. } | StepOutcome::ToppedOut { .. }
        )
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    /// `None` only after the game ended on a blocked spawn.
    active: Option<Piece>,
    next: Piece,
    generator: PieceGenerator<R>,
    stats: Stats,
    phase: Phase,
    pieces_locked: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_generator(PieceGenerator::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a game on an empty grid.
    pub fn with_generator(generator: PieceGenerator<R>) -> Self {
        Self::with_grid(Grid::new(), generator)
    }

    /// Start a game on a prepared grid.
    ///
    /// If the first piece cannot spawn, the game starts in [`Phase::GameOver`].
    pub fn with_grid(grid: Grid, mut generator: PieceGenerator<R>) -> Self {
        let first = generator.next();
        let next = generator.next();
        let mut state = Self {
            grid,
            active: None,
            next: first,
            generator,
            stats: Stats::new(),
            phase: Phase::Playing,
            pieces_locked: 0,
        };
        state.spawn(first, next);
        state
    }

    /// Throw the current game away and start over on an empty grid.
    ///
    /// The generator keeps its position, so a new game gets new pieces.
    pub fn restart(&mut self) {
        self.grid = Grid::new();
        self.stats = Stats::new();
        self.phase = Phase::Playing;
        self.pieces_locked = 0;
        let first = self.generator.next();
        let next = self.generator.next();
        self.spawn(first, next);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn lines(&self) -> u32 {
        self.stats.lines
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.stats.drop_interval_ms
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Try to move the active piece. Returns `true` if the move was committed.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = translate(&active, dx, dy);
        if piece_collides(&self.grid, &moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece clockwise, with kick fallback.
    ///
    /// Returns `false` and leaves the piece unchanged if no candidate fits.
    pub fn try_rotate(&mut self) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match try_rotate(&self.grid, &active) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Number of rows the active piece can still fall.
    pub fn drop_distance(&self) -> Option<u32> {
        let active = self.active?;
        let mut distance: u32 = 0;
        let mut probe = active;
        loop {
            let below = translate(&probe, 0, 1);
            if piece_collides(&self.grid, &below) {
                return Some(distance);
            }
            probe = below;
            distance += 1;
        }
    }

    /// Move the active piece to its lowest legal row and award drop points.
    ///
    /// Does not lock: the caller follows up with a gravity step. Returns the
    /// number of rows travelled (`0` if not playing or already resting).
    pub fn hard_drop(&mut self) -> u32 {
        if !self.phase.accepts_moves() {
            return 0;
        }
        let (Some(active), Some(distance)) = (self.active, self.drop_distance()) else {
            return 0;
        };
        if distance == 0 {
            return 0;
        }

        self.active = Some(translate(&active, 0, distance as i8));
        self.stats.record_hard_drop(distance);
        distance
    }

    /// One gravity step: fall one row, or lock, clear, score and spawn.
    pub fn gravity_step(&mut self) -> StepOutcome {
        if !self.phase.accepts_moves() {
            return StepOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return StepOutcome::Ignored;
        };

        let below = translate(&active, 0, 1);
        if !piece_collides(&self.grid, &below) {
            self.active = Some(below);
            return StepOutcome::Moved;
        }

        self.lock(active)
    }

    /// Flip `Playing ↔ Paused`. No-op once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => return false,
        };
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.grid.rows();
        if let Some(active) = &self.active {
            out.overlay(active);
        }
        out.next = Some(NextSnapshot::from(self.next));
        out.phase = self.phase;
        out.score = self.stats.score;
        out.lines = self.stats.lines;
        out.level = self.stats.level;
        out.drop_interval_ms = self.stats.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Merge `piece`, compact full rows, score them and bring in the next piece.
    fn lock(&mut self, piece: Piece) -> StepOutcome {
        let merged = merge(&self.grid, &piece.matrix, piece.pos);
        let cleared = clear_lines_detailed(&merged);
        let lines = cleared.cleared();

        self.grid = cleared.grid;
        self.active = None;
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        let points = self.stats.record_lock(lines);

        let candidate = self.next;
        let upcoming = self.generator.next();
        if self.spawn(candidate, upcoming) {
            StepOutcome::Locked { lines, points }
        } else {
            StepOutcome::ToppedOut { lines, points }
        }
    }

    /// Make `piece` active and queue `upcoming` behind it.
    ///
    /// A blocked spawn ends the game and keeps the current look-ahead piece.
    fn spawn(&mut self, piece: Piece, upcoming: Piece) -> bool {
        if piece_collides(&self.grid, &piece) {
            self.active = None;
            self.next = piece;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.next = upcoming;
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape;
    use crate::rng::Randomizer;
    use crate::types::{PieceKind, Position, COLS, ROWS};

    /// Replays a fixed list of catalog indices, then repeats the last one.
    #[derive(Debug, Clone)]
    struct Script {
        values: Vec<u32>,
        i: usize,
    }

    impl RandomSource for Script {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.i.min(self.values.len() - 1)];
            self.i += 1;
            v
        }
    }

    fn scripted(kinds: &[PieceKind]) -> PieceGenerator<Script> {
        let values = kinds.iter().map(|k| (k.color_id() - 1) as u32).collect();
        PieceGenerator::new(Script { values, i: 0 }, Randomizer::Uniform)
    }

    fn full_row_except(y: i32, gaps: &[i32]) -> Vec<(i32, i32, u8)> {
        (0..COLS as i32)
            .filter(|x| !gaps.contains(x))
            .map(|x| (x, y, 1))
            .collect()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.drop_interval_ms(), 1000);
        assert!(state.active().is_some());
        assert_eq!(state.grid(), &Grid::new());
    }

    #[test]
    fn test_initial_pieces_come_from_two_draws() {
        let state = GameState::with_generator(scripted(&[PieceKind::T, PieceKind::I]));
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
        assert_eq!(state.next_piece().kind, PieceKind::I);
    }

    #[test]
    fn test_try_move() {
        let mut state = GameState::with_generator(scripted(&[PieceKind::T]));
        let x0 = state.active().unwrap().pos.x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.active().unwrap().pos.x, x0 + 1);
        assert!(state.try_move(-1, 0));
        assert_eq!(state.active().unwrap().pos.x, x0);
    }

    #[test]
    fn test_try_move_stops_at_wall() {
        let mut state = GameState::with_generator(scripted(&[PieceKind::O]));
        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(-1, 0) {
                moved += 1;
            }
        }
        // O spawns at x = 4.
        assert_eq!(moved, 4);
        assert_eq!(state.active().unwrap().pos.x, 0);
    }

    #[test]
    fn test_try_rotate_commits_rotated_matrix() {
        let mut state = GameState::with_generator(scripted(&[PieceKind::J]));
        let before = *state.active().unwrap();
        assert!(state.try_rotate());
        let after = *state.active().unwrap();
        assert_ne!(before.matrix, after.matrix);
        assert_eq!(before.pos, after.pos);
    }

    #[test]
    fn test_gravity_step_moves_then_locks() {
        let mut state = GameState::with_generator(scripted(&[PieceKind::O, PieceKind::T]));

        for _ in 0..18 {
            assert_eq!(state.gravity_step(), StepOutcome::Moved);
        }
        assert_eq!(state.active().unwrap().pos.y, 18);

        let outcome = state.gravity_step();
        assert_eq!(outcome, StepOutcome::Locked { lines: 0, points: 0 });
        assert_eq!(state.grid().filled_count(), 4);
        assert_eq!(state.grid().cell_at(4, 19), PieceKind::O.color_id());
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
        assert_eq!(state.active().unwrap().pos, Position::new(4, 0));
        assert_eq!(state.pieces_locked(), 1);
    }

    #[test]
    fn test_lock_clears_line_and_scores() {
        // Bottom row missing only columns 4 and 5; an O fills them.
        let grid = Grid::new().with_cells_set(full_row_except(19, &[4, 5]));
        let mut state = GameState::with_grid(grid, scripted(&[PieceKind::O, PieceKind::I]));

        let distance = state.hard_drop();
        assert_eq!(distance, 18);
        assert_eq!(state.score(), 36);

        let outcome = state.gravity_step();
        assert_eq!(outcome, StepOutcome::Locked { lines: 1, points: 40 });
        assert_eq!(state.score(), 76);
        assert_eq!(state.lines(), 1);
        // The O's top half dropped into the bottom row.
        assert_eq!(state.grid().filled_count(), 2);
        assert_eq!(state.grid().cell_at(4, 19), 2);
        assert_eq!(state.grid().cell_at(5, 19), 2);
    }

    #[test]
    fn test_hard_drop_when_resting_is_noop() {
        let mut state = GameState::with_generator(scripted(&[PieceKind::O]));
        state.hard_drop();
        let resting = *state.active().unwrap();
        let score = state.score();

        assert_eq!(state.hard_drop(), 0);
        assert_eq!(*state.active().unwrap(), resting);
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        // Fill row 0 so nothing can spawn.
        let grid = Grid::new().with_cells_set(full_row_except(0, &[]));
        let mut state = GameState::with_grid(grid, scripted(&[PieceKind::T]));

        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.active().is_none());

        let before = *state.grid();
        assert!(!state.try_move(-1, 0));
        assert!(!state.try_rotate());
        assert_eq!(state.gravity_step(), StepOutcome::Ignored);
        assert_eq!(state.hard_drop(), 0);
        assert!(!state.toggle_pause());
        assert_eq!(*state.grid(), before);
    }

    #[test]
    fn test_top_out_after_lock() {
        // Columns 3..=6 filled from row 2 down, leaving two free rows at the top.
        let mut writes = Vec::new();
        for y in 2..ROWS as i32 {
            for x in 3..=6 {
                writes.push((x, y, 1));
            }
        }
        let grid = Grid::new().with_cells_set(writes);
        let mut state = GameState::with_grid(grid, scripted(&[PieceKind::O, PieceKind::O]));

        let outcome = state.gravity_step();
        assert_eq!(outcome, StepOutcome::ToppedOut { lines: 0, points: 0 });
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn test_pause_blocks_moves_and_preserves_state() {
        let mut state = GameState::new(7);
        let before = state.snapshot();

        assert!(state.toggle_pause());
        assert_eq!(state.phase(), Phase::Paused);
        assert!(!state.try_move(1, 0));
        assert!(!state.try_rotate());
        assert_eq!(state.gravity_step(), StepOutcome::Ignored);

        assert!(state.toggle_pause());
        let after = state.snapshot();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restart_resets_everything() {
        let grid = Grid::new().with_cells_set(full_row_except(0, &[]));
        let mut state = GameState::with_grid(grid, scripted(&[PieceKind::S]));
        assert_eq!(state.phase(), Phase::GameOver);

        state.restart();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.grid(), &Grid::new());
        assert_eq!(*state.stats(), Stats::new());
        assert_eq!(state.active().unwrap().pos, Position::new(4, 0));
    }

    #[test]
    fn test_snapshot_overlays_active_piece() {
        let state = GameState::with_generator(scripted(&[PieceKind::I, PieceKind::Z]));
        let snap = state.snapshot();

        assert_eq!(snap.board[1][3..7], [1u8, 1, 1, 1]);
        assert_eq!(snap.next.unwrap().kind, PieceKind::Z);
        assert_eq!(snap.next.unwrap().matrix, shape(PieceKind::Z).matrix);
        // The grid itself is untouched.
        assert_eq!(state.grid().filled_count(), 0);
    }
}
