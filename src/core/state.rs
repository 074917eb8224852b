//! Game state: the board plus the side to move.
//!
//! Fields are private. Collaborators (rendering, drivers, tests) read
//! through `board()` and `turn()`; the only mutation paths are the
//! `pub(crate)` methods used by `rules::engine`, so an accepted move is the
//! single way state changes after construction.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::coord::Coord;
use super::piece::Color;

/// Complete game state: one board, one side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Color,
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }

    /// Assemble a state from parts (used by `GameBuilder`).
    pub(crate) const fn from_parts(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Relocate the piece on `from` to `to`, overwriting (capturing) any
    /// occupant of `to`. Caller guarantees `from` is occupied and both
    /// squares are in bounds.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) {
        let piece = self.board.take(from);
        self.board.set(to, piece);
    }

    /// Hand the move to the other side.
    pub(crate) fn flip_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::{Piece, PieceKind};

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::White);
        assert!(state.board().has_king(Color::White));
        assert!(state.board().has_king(Color::Black));
    }

    #[test]
    fn test_relocate_captures() {
        let mut board = Board::empty();
        board.set(
            Coord::new(4, 4),
            Some(Piece::new(PieceKind::Queen, Color::White)),
        );
        board.set(
            Coord::new(4, 7),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        let mut state = GameState::from_parts(board, Color::White);

        state.relocate(Coord::new(4, 4), Coord::new(4, 7));

        assert_eq!(state.board().get(Coord::new(4, 4)), None);
        assert_eq!(
            state.board().get(Coord::new(4, 7)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(state.board().pieces().count(), 1);
    }

    #[test]
    fn test_flip_turn() {
        let mut state = GameState::new();
        state.flip_turn();
        assert_eq!(state.turn(), Color::Black);
        state.flip_turn();
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn test_serialization() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
