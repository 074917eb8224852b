//! Core board-model types: pieces, coordinates, the board, and game state.
//!
//! These types carry no rules knowledge; move legality and turn handling
//! live in `crate::rules`.

pub mod board;
pub mod coord;
pub mod piece;
pub mod state;

pub use board::{Board, Square};
pub use coord::Coord;
pub use piece::{Color, Piece, PieceKind};
pub use state::GameState;
