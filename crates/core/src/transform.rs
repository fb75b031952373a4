//! Transform module - translation, rotation and kick fallback
//!
//! `translate` and `rotate` are pure and never validate. `try_rotate` pairs a
//! rotation with the collision check and the fixed kick list.

use crate::collision::collides;
use crate::grid::Grid;
use crate::pieces::{Matrix, Piece};
use crate::types::KICK_OFFSETS;

/// Shift a piece by `(dx, dy)` without any legality check.
pub fn translate(piece: &Piece, dx: i8, dy: i8) -> Piece {
    Piece {
        pos: piece.pos.offset(dx, dy),
        ..*piece
    }
}

/// Rotate an N×N matrix 90° clockwise: `out[c][N-1-r] = in[r][c]`.
pub fn rotate(matrix: &Matrix) -> Matrix {
    let n = matrix.size();
    let mut out = Matrix::empty(n);
    for r in 0..n {
        for c in 0..n {
            out.set(c, n - 1 - r, matrix.get(r, c));
        }
    }
    out
}

/// Rotate clockwise, falling back to the kick offsets in order.
///
/// Returns the first non-colliding candidate, or `None` if the rotation is
/// impossible at every offset.
pub fn try_rotate(grid: &Grid, piece: &Piece) -> Option<Piece> {
    let rotated = rotate(&piece.matrix);

    if !collides(grid, &rotated, piece.pos) {
        return Some(Piece {
            matrix: rotated,
            ..*piece
        });
    }

    KICK_OFFSETS.iter().find_map(|&(dx, dy)| {
        let pos = piece.pos.offset(dx, dy);
        (!collides(grid, &rotated, pos)).then_some(Piece {
            matrix: rotated,
            pos,
            ..*piece
        })
    })
}
