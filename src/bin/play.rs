//! Interactive two-player chess at the terminal.
//!
//! Renders the board, prompts the side to move for a pair of coordinates
//! (`e2 e4` or `2,5 4,5`), and replays the prompt on malformed input or an
//! illegal move. Ends by announcing the winner once a king is captured.

use std::io::{self, BufRead, Write};

use rust_chess::{notation, Coord, Game};

fn read_move(line: &str) -> Option<(Coord, Coord)> {
    let mut parts = line.split_whitespace();
    let from = notation::parse_coord(parts.next()?)?;
    let to = notation::parse_coord(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let mut game = Game::new();
    println!("rust-chess: enter moves as \"e2 e4\" or \"2,5 4,5\". The game ends when a king falls.");

    while !game.is_game_over() {
        println!("\n{}", notation::render(game.board()));
        print!("{} to move> ", game.turn());
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!("\nInput closed, game abandoned.");
            return Ok(());
        };
        let line = line?;

        let Some((from, to)) = read_move(&line) else {
            println!("Could not read that. Enter two squares, e.g. \"e2 e4\".");
            continue;
        };

        if !game.apply_move(from, to) {
            println!("Illegal move: {from} {to}. Try again.");
        }
    }

    println!("\n{}", notation::render(game.board()));
    match game.winner() {
        Some(color) => println!("Game over. {color} wins!"),
        None => println!("Game over."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_move_both_forms() {
        assert_eq!(
            read_move("e2 e4"),
            Some((Coord::new(1, 4), Coord::new(3, 4)))
        );
        assert_eq!(
            read_move("2,5 4,5"),
            Some((Coord::new(1, 4), Coord::new(3, 4)))
        );
        assert_eq!(
            read_move("  e2   e4  "),
            Some((Coord::new(1, 4), Coord::new(3, 4)))
        );
    }

    #[test]
    fn test_read_move_rejects_malformed() {
        assert_eq!(read_move(""), None);
        assert_eq!(read_move("e2"), None);
        assert_eq!(read_move("e2 e4 e5"), None);
        assert_eq!(read_move("e2 j9"), None);
    }
}
