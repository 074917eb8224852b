//! Per-piece movement legality.
//!
//! `legal` dispatches on `PieceKind`, one predicate per kind. Every
//! predicate assumes the ownership check already passed and answers one
//! question: does this piece's movement pattern reach `to` from `from`,
//! unobstructed, with correct capture semantics?
//!
//! Blocking checks look only at the squares strictly between origin and
//! destination; any occupied interior square voids the move regardless of
//! what sits on the destination.

use smallvec::SmallVec;

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::piece::{Color, Piece, PieceKind};

/// Longest possible strict interior of a line on an 8×8 board.
type Path = SmallVec<[Coord; 6]>;

/// Check the piece-specific legality rule for a proposed move.
///
/// Callers guarantee both coordinates are in bounds and `from != to`.
#[must_use]
pub fn legal(board: &Board, piece: Piece, from: Coord, to: Coord) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn(board, piece.color, from, to),
        PieceKind::Knight => knight(board, piece.color, from, to),
        PieceKind::Bishop => bishop(board, piece.color, from, to),
        PieceKind::Rook => rook(board, piece.color, from, to),
        PieceKind::Queen => rook(board, piece.color, from, to) || bishop(board, piece.color, from, to),
        PieceKind::King => king(board, piece.color, from, to),
    }
}

/// Destination constraint shared by every kind except the pawn's forward
/// step: empty, or occupied by the opposing color.
fn can_land(board: &Board, mover: Color, to: Coord) -> bool {
    match board.get(to) {
        None => true,
        Some(occupant) => occupant.color != mover,
    }
}

/// Squares strictly between `from` and `to` along a straight or diagonal
/// line. Caller guarantees the two squares are actually on such a line.
fn interior(from: Coord, to: Coord) -> Path {
    let (d_row, d_col) = from.delta(to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let len = d_row.abs().max(d_col.abs());

    let mut path = Path::new();
    let mut at = from;
    for _ in 1..len {
        // Stays on the board: the endpoints are in bounds and we stop short.
        match at.offset(step_row, step_col) {
            Some(next) => {
                path.push(next);
                at = next;
            }
            None => break,
        }
    }
    path
}

/// True when every square strictly between `from` and `to` is empty.
fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    interior(from, to).iter().all(|&square| board.is_empty(square))
}

fn pawn(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let dir = color.forward();
    let (d_row, d_col) = from.delta(to);

    // Forward moves land only on empty squares.
    if d_col == 0 && board.is_empty(to) {
        if d_row == dir {
            return true;
        }
        // Double step from the home rank, intermediate square also empty.
        if from.row == color.home_rank() && d_row == 2 * dir {
            return from
                .offset(dir, 0)
                .is_some_and(|mid| board.is_empty(mid));
        }
        return false;
    }

    // Diagonal step is capture-only: an opposing piece must be there.
    if d_col.abs() == 1 && d_row == dir {
        return board
            .get(to)
            .is_some_and(|target| target.color != color);
    }

    false
}

fn rook(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    path_clear(board, from, to) && can_land(board, color, to)
}

fn knight(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    let shape = matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2));
    shape && can_land(board, color, to)
}

fn bishop(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    if d_row.abs() != d_col.abs() || d_row == 0 {
        return false;
    }
    path_clear(board, from, to) && can_land(board, color, to)
}

fn king(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    if d_row == 0 && d_col == 0 {
        return false;
    }
    d_row.abs() <= 1 && d_col.abs() <= 1 && can_land(board, color, to)
}
