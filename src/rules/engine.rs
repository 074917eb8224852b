//! The game engine: move application, turn alternation, termination.
//!
//! `Game` owns the state and exposes the single mutation point,
//! `apply_move`. Every failure is a silent boolean rejection that leaves
//! the state untouched; there is no error taxonomy here. The game ends
//! when a king has been captured, not at checkmate.

use serde::{Deserialize, Serialize};

use super::movement;
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::piece::{Color, Piece};
use crate::core::state::GameState;

/// A two-player chess game driven by one sequential caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a game from the standard position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Build a game from an arbitrary position.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    /// Validate and apply one move.
    ///
    /// Rejection (returning `false`) leaves board and turn untouched, and
    /// happens when:
    /// - either coordinate is out of bounds, or `from == to`,
    /// - `from` is empty,
    /// - the piece on `from` does not belong to the side to move,
    /// - the piece's movement rule does not allow `from -> to` on the
    ///   current board.
    ///
    /// On acceptance the piece relocates (capturing whatever occupied the
    /// destination), the turn flips, and the call returns `true`.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> bool {
        if !from.in_bounds() || !to.in_bounds() || from == to {
            return false;
        }
        let Some(piece) = self.state.board().get(from) else {
            return false;
        };
        if piece.color != self.state.turn() {
            return false;
        }
        if !movement::legal(self.state.board(), piece, from, to) {
            return false;
        }

        self.state.relocate(from, to);
        self.state.flip_turn();
        true
    }

    /// The game is over once either king is missing from the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let board = self.state.board();
        !board.has_king(Color::White) || !board.has_king(Color::Black)
    }

    /// The color whose king survives, once the other king is gone.
    /// `None` while both kings stand.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        let board = self.state.board();
        match (board.has_king(Color::White), board.has_king(Color::Black)) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for games starting from arbitrary positions.
///
/// Used by tests and scenario setups; the board starts empty.
///
/// ```
/// use rust_chess::core::{Color, Coord, Piece, PieceKind};
/// use rust_chess::rules::Game;
///
/// let game = Game::builder()
///     .piece(Coord::new(4, 4), Piece::new(PieceKind::King, Color::White))
///     .piece(Coord::new(4, 5), Piece::new(PieceKind::Queen, Color::Black))
///     .turn(Color::Black)
///     .build();
///
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    turn: Color,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Start from an empty board, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            turn: Color::White,
        }
    }

    /// Place a piece. Later placements on the same square overwrite.
    #[must_use]
    pub fn piece(mut self, at: Coord, piece: Piece) -> Self {
        self.board.set(at, Some(piece));
        self
    }

    /// Choose the side to move.
    #[must_use]
    pub fn turn(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    /// Finish construction. The builder is the last writer; from here on
    /// only `apply_move` mutates the state.
    #[must_use]
    pub fn build(self) -> Game {
        Game {
            state: GameState::from_parts(self.board, self.turn),
        }
    }
}
