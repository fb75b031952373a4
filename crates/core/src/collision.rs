//! Collision detection
//!
//! [`collides`] decides the legality of every move, rotation, spawn and drop.

use crate::grid::Grid;
use crate::pieces::{Matrix, Piece};
use crate::types::{Position, COLS, EMPTY, ROWS};

/// Whether `matrix` placed at `pos` leaves the board or overlaps a locked cell.
///
/// Cells above the top row (`y < 0`) are only checked against the side walls,
/// so a piece may spawn partly above the visible board.
pub fn collides(grid: &Grid, matrix: &Matrix, pos: Position) -> bool {
    matrix.filled().any(|(r, c, _)| {
        let x = pos.x as i32 + c as i32;
        let y = pos.y as i32 + r as i32;
        if x < 0 || x >= COLS as i32 || y >= ROWS as i32 {
            return true;
        }
        y >= 0 && grid.cell_at(x, y) != EMPTY
    })
}

/// [`collides`] for a whole piece at its own position.
pub fn piece_collides(grid: &Grid, piece: &Piece) -> bool {
    collides(grid, &piece.matrix, piece.pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape;
    use crate::types::PieceKind;

    #[test]
    fn test_walls_and_floor() {
        let grid = Grid::new();
        let t = shape(PieceKind::T).matrix;

        assert!(!collides(&grid, &t, Position::new(0, 0)));
        // Left column of T is empty in row 0 but filled in row 1.
        assert!(collides(&grid, &t, Position::new(-1, 0)));
        assert!(!collides(&grid, &t, Position::new(7, 0)));
        assert!(collides(&grid, &t, Position::new(8, 0)));
        // Bottom row of T matrix is empty, so it may hang one row past the floor.
        assert!(!collides(&grid, &t, Position::new(3, 18)));
        assert!(collides(&grid, &t, Position::new(3, 19)));
    }

    #[test]
    fn test_cells_above_board_are_exempt_from_occupancy() {
        let grid = Grid::new().with_cells_set((0..COLS as i32).map(|x| (x, 0, 1)));
        let o = shape(PieceKind::O).matrix;

        // Fully above the board: no occupancy check.
        assert!(!collides(&grid, &o, Position::new(4, -2)));
        // Lower row lands on the filled top row.
        assert!(collides(&grid, &o, Position::new(4, -1)));
        // Still wall-checked while above the board.
        assert!(collides(&grid, &o, Position::new(-1, -2)));
    }

    #[test]
    fn test_occupied_cell() {
        let grid = Grid::new().with_cells_set([(5, 10, 4)]);
        let o = shape(PieceKind::O).matrix;
        assert!(collides(&grid, &o, Position::new(4, 9)));
        assert!(!collides(&grid, &o, Position::new(6, 9)));
    }
}
