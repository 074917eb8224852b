//! The 8×8 board.
//!
//! `Board` is a fixed grid of `Option<Piece>`. The public surface is
//! read-only (`get`, `has_king`, `pieces`); all writes are `pub(crate)` so
//! that only the rules engine and its position builder can mutate squares.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::{Color, Piece, PieceKind};

/// One square: empty or occupied by exactly one piece.
pub type Square = Option<Piece>;

/// Back-rank kinds from file a to file h. The king sits on column 4.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of squares, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Create the standard starting position: back ranks on rows 0 and 7,
    /// pawns on rows 1 and 6, everything else empty.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_rank();
            let home = color.home_rank();
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.squares[back as usize][col] = Some(Piece::new(kind, color));
            }
            for col in 0..8 {
                board.squares[home as usize][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Read one square. Out-of-bounds coordinates read as empty.
    #[must_use]
    pub fn get(&self, at: Coord) -> Square {
        if at.in_bounds() {
            self.squares[at.row as usize][at.col as usize]
        } else {
            None
        }
    }

    /// Check whether the square is unoccupied (out-of-bounds counts as empty).
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Write one square. Caller guarantees `at` is in bounds.
    pub(crate) fn set(&mut self, at: Coord, square: Square) {
        self.squares[at.row as usize][at.col as usize] = square;
    }

    /// Remove and return the piece at `at`, leaving the square empty.
    pub(crate) fn take(&mut self, at: Coord) -> Square {
        self.squares[at.row as usize][at.col as usize].take()
    }

    /// Iterate over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, square)| {
                square.map(|piece| (Coord::new(row as u8, col as u8), piece))
            })
        })
    }

    /// Check whether `color` still has its king on the board.
    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces()
            .any(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
    }

    /// Count pieces of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
