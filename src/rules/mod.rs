//! Move legality and the game engine.
//!
//! `movement` holds one legality predicate per piece kind; `engine` owns
//! the state machine that applies moves and detects king-capture endings.

pub mod engine;
pub mod movement;

pub use engine::{Game, GameBuilder};
