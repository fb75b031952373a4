//! Pieces module - shape catalog, matrices and the active piece
//!
//! Every shape is an N×N matrix at rotation state 0. Nonzero cells carry the
//! kind's color id, so merging a piece into the grid is a plain copy.

use crate::types::{PieceKind, Position, COLS, EMPTY};

/// Largest matrix side used by the catalog (the I piece).
pub const MAX_MATRIX: usize = 4;

/// Square matrix of cell values, side 2..=4.
///
/// Cells outside `size × size` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: usize,
    cells: [[u8; MAX_MATRIX]; MAX_MATRIX],
}

impl Matrix {
    /// Build a matrix from its rows. The number of rows gives the side length.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square or larger than [`MAX_MATRIX`].
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(size <= MAX_MATRIX, "matrix side {size} exceeds {MAX_MATRIX}");
        let mut cells = [[EMPTY; MAX_MATRIX]; MAX_MATRIX];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "matrix row {r} is not {size} wide");
            cells[r][..size].copy_from_slice(row);
        }
        Self { size, cells }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width used for spawn centering (same as the side length).
    pub fn width(&self) -> usize {
        self.size
    }

    /// Cell value at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> u8 {
        if r < self.size && c < self.size {
            self.cells[r][c]
        } else {
            EMPTY
        }
    }

    /// Iterate `(row, col, value)` over the nonzero cells, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        (0..self.size).flat_map(move |r| {
            (0..self.size).filter_map(move |c| {
                let v = self.cells[r][c];
                (v != EMPTY).then_some((r, c, v))
            })
        })
    }

    /// Rows as slices, for rendering previews.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.size].iter().map(move |row| &row[..self.size])
    }

    pub(crate) fn set(&mut self, r: usize, c: usize, v: u8) {
        self.cells[r][c] = v;
    }

    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: [[EMPTY; MAX_MATRIX]; MAX_MATRIX],
        }
    }
}

/// Immutable catalog entry: a kind and its rotation-0 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub matrix: Matrix,
}

impl Shape {
    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }
}

/// Look up the catalog shape for a kind.
pub fn shape(kind: PieceKind) -> Shape {
    let matrix = match kind {
        PieceKind::I => Matrix::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::O => Matrix::from_rows(&[&[2, 2], &[2, 2]]),
        PieceKind::T => Matrix::from_rows(&[&[0, 3, 0], &[3, 3, 3], &[0, 0, 0]]),
        PieceKind::S => Matrix::from_rows(&[&[0, 4, 4], &[4, 4, 0], &[0, 0, 0]]),
        PieceKind::Z => Matrix::from_rows(&[&[5, 5, 0], &[0, 5, 5], &[0, 0, 0]]),
        PieceKind::J => Matrix::from_rows(&[&[6, 0, 0], &[6, 6, 6], &[0, 0, 0]]),
        PieceKind::L => Matrix::from_rows(&[&[0, 0, 7], &[7, 7, 7], &[0, 0, 0]]),
    };
    Shape { kind, matrix }
}

/// Horizontally centered spawn offset for a matrix of the given width.
pub fn spawn_position(matrix_width: usize) -> Position {
    Position::new((COLS / 2) as i8 - (matrix_width / 2) as i8, 0)
}

/// A falling piece: its (possibly rotated) matrix, board offset and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub pos: Position,
}

impl Piece {
    /// Fresh piece of `kind` at its spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = shape(kind).matrix;
        Self {
            kind,
            matrix,
            pos: spawn_position(matrix.width()),
        }
    }

    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let (px, py) = (self.pos.x as i32, self.pos.y as i32);
        self.matrix
            .filled()
            .map(move |(r, c, v)| (px + c as i32, py + r as i32, v))
    }
}
