//! # rust-chess
//!
//! A minimal two-player chess rules engine.
//!
//! The engine maintains an 8×8 board and the side to move, validates moves
//! against per-piece movement rules, and declares the game over when a king
//! has been captured. Deliberately out of scope: check and checkmate
//! detection, castling, en passant, promotion, move history, and draw rules.
//!
//! ## Design Principles
//!
//! 1. **One mutation point**: after construction, only
//!    [`rules::Game::apply_move`] changes game state. Everything else is a
//!    read-only view.
//!
//! 2. **Boolean rejection**: an illegal move is not an error. `apply_move`
//!    returns `false` and leaves the state untouched; the driving loop asks
//!    again.
//!
//! 3. **Explicit enums**: piece color and kind are tagged enums. The
//!    uppercase/lowercase letter convention exists only at the text surface.
//!
//! ## Modules
//!
//! - `core`: pieces, coordinates, the board, game state
//! - `rules`: per-piece legality predicates and the `Game` engine
//! - `notation`: coordinate parsing (`"e2"`, `"2,5"`) and board rendering
//!
//! ## Example
//!
//! ```
//! use rust_chess::{Coord, Game};
//!
//! let mut game = Game::new();
//! assert!(game.apply_move(Coord::new(1, 4), Coord::new(3, 4))); // e2 e4
//! assert!(!game.apply_move(Coord::new(6, 4), Coord::new(3, 4))); // e7 e4: too far
//! assert!(!game.is_game_over());
//! ```

pub mod core;
pub mod notation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Color, Coord, GameState, Piece, PieceKind, Square};
pub use crate::notation::{parse_coord, render};
pub use crate::rules::{Game, GameBuilder};
