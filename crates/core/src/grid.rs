//! Grid module - the board of locked cells
//!
//! The grid is a 10x20 array of cell values where `0` is empty and `1..=7` is the
//! color id of the piece that locked there. Dimensions are part of the type, so a
//! grid can never be resized.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::types::{COLS, EMPTY, ROWS};

/// One row of cell values.
pub type Row = [u8; COLS];

/// The game grid - 20 rows of 10 cells each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; ROWS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY; COLS]; ROWS],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Values above 7 are not valid piece ids and are clamped to 7.
    pub fn from_rows(rows: [Row; ROWS]) -> Self {
        let mut rows = rows;
        for cell in rows.iter_mut().flatten() {
            if *cell > 7 {
                *cell = 7;
            }
        }
        Self { rows }
    }

    /// Width of the grid
    pub fn width(&self) -> usize {
        COLS
    }

    /// Height of the grid
    pub fn height(&self) -> usize {
        ROWS
    }

    /// Whether `(x, y)` lies on the board.
    #[inline(always)]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < COLS as i32 && y >= 0 && y < ROWS as i32
    }

    /// Cell value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board. Callers bounds-check first.
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        assert!(
            Self::in_bounds(x, y),
            "cell_at({x}, {y}) outside {COLS}x{ROWS} grid"
        );
        self.rows[y as usize][x as usize]
    }

    /// Checked cell access. Returns `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if Self::in_bounds(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Return a copy of this grid with the listed `(x, y, value)` writes applied.
    ///
    /// Writes that fall outside the board are skipped.
    pub fn with_cells_set<I>(&self, cells: I) -> Grid
    where
        I: IntoIterator<Item = (i32, i32, u8)>,
    {
        let mut next = *self;
        for (x, y, value) in cells {
            if Self::in_bounds(x, y) {
                next.rows[y as usize][x as usize] = value.min(7);
            }
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.rows.get(y) {
            Some(row) => row.iter().all(|&cell| cell != EMPTY),
            None => false,
        }
    }

    /// Read access to all rows, top to bottom.
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Number of filled cells on the board.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row; ROWS] {
        &mut self.rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
