//! Lock & line-clear module
//!
//! Merging a piece into the grid and compacting full rows. Both operations are
//! pure: they return a new grid and leave the input untouched.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::pieces::Matrix;
use crate::types::{Position, EMPTY, ROWS};

/// Result of compacting a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub grid: Grid,
    /// Indices (in the input grid) of the removed rows, bottom to top.
    ///
    /// A lock completes at most four rows; hand-built grids with more full
    /// rows only report the lowest four here.
    pub rows: ArrayVec<usize, 4>,
    count: usize,
}

impl LineClear {
    /// Number of rows removed.
    pub fn cleared(&self) -> usize {
        self.count
    }
}

/// Write each nonzero cell of `matrix` at `pos` into a copy of `grid`.
///
/// Cells that land outside the board are skipped.
pub fn merge(grid: &Grid, matrix: &Matrix, pos: Position) -> Grid {
    grid.with_cells_set(
        matrix
            .filled()
            .map(|(r, c, v)| (pos.x as i32 + c as i32, pos.y as i32 + r as i32, v)),
    )
}

/// Remove every full row, keep the rest in order and refill from the top.
///
/// Returns the compacted grid and the number of rows removed.
pub fn clear_lines(grid: &Grid) -> (Grid, usize) {
    let result = clear_lines_detailed(grid);
    let cleared = result.cleared();
    (result.grid, cleared)
}

/// Like [`clear_lines`], also reporting which rows were removed.
///
/// Uses a bottom-up two-pointer pass with no allocation.
pub fn clear_lines_detailed(grid: &Grid) -> LineClear {
    let mut next = Grid::new();
    let mut rows = ArrayVec::new();
    let mut write_y = ROWS;

    for read_y in (0..ROWS).rev() {
        if grid.is_row_full(read_y) {
            let _ = rows.try_push(read_y);
        } else {
            write_y -= 1;
            next.rows_mut()[write_y] = grid.rows()[read_y];
        }
    }

    // Rows 0..write_y of `next` are still empty.
    debug_assert!(next.rows()[..write_y]
        .iter()
        .flatten()
        .all(|&c| c == EMPTY));

    LineClear {
        grid: next,
        rows,
        count: write_y,
    }
}
