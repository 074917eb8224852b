//! Text surface: coordinate parsing and board rendering.
//!
//! These are collaborators over the read-only board view, not part of the
//! engine contract. Malformed input parses to `None` and must be filtered
//! out before `apply_move` is called.
//!
//! Two input forms are accepted, matching the interactive driver's prompt:
//! - algebraic: `"e2"` — file letter `a..h`, rank digit `1..8`
//! - comma form: `"2,5"` — one-based `row,col`

use crate::core::board::Board;
use crate::core::coord::Coord;

/// Parse a single square coordinate.
///
/// ```
/// use rust_chess::core::Coord;
/// use rust_chess::notation::parse_coord;
///
/// assert_eq!(parse_coord("e2"), Some(Coord::new(1, 4)));
/// assert_eq!(parse_coord("2,5"), Some(Coord::new(1, 4)));
/// assert_eq!(parse_coord("j9"), None);
/// ```
#[must_use]
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    if input.contains(',') {
        parse_comma(input)
    } else {
        parse_algebraic(input)
    }
}

/// Algebraic form: file letter then rank digit, e.g. `"e2"`.
fn parse_algebraic(input: &str) -> Option<Coord> {
    let mut chars = input.chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let col = (file as i32) - ('a' as i32);
    let row = rank.to_digit(10)? as i32 - 1;
    if (0..8).contains(&col) && (0..8).contains(&row) {
        Some(Coord::new(row as u8, col as u8))
    } else {
        None
    }
}

/// Comma form: one-based `row,col`, e.g. `"2,5"` for e2.
fn parse_comma(input: &str) -> Option<Coord> {
    let (row_str, col_str) = input.split_once(',')?;
    let row = row_str.trim().parse::<i32>().ok()? - 1;
    let col = col_str.trim().parse::<i32>().ok()? - 1;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Coord::new(row as u8, col as u8))
    } else {
        None
    }
}

/// Render the board as a bordered text grid.
///
/// Files `a..h` run across the top and bottom, ranks 8 down to 1 with the
/// rank number on both sides. White pieces print uppercase, Black lowercase,
/// empty squares as `.`.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::from("  a b c d e f g h\n");
    for row in (0..8u8).rev() {
        out.push_str(&format!("{} ", row + 1));
        for col in 0..8u8 {
            match board.get(Coord::new(row, col)) {
                Some(piece) => out.push(piece.to_char()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str(&format!("{}\n", row + 1));
    }
    out.push_str("  a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algebraic() {
        assert_eq!(parse_coord("a1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_coord("e2"), Some(Coord::new(1, 4)));
        assert_eq!(parse_coord("h8"), Some(Coord::new(7, 7)));
        assert_eq!(parse_coord("E2"), Some(Coord::new(1, 4)));
    }

    #[test]
    fn test_parse_comma_one_based() {
        assert_eq!(parse_coord("1,1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_coord("2,5"), Some(Coord::new(1, 4)));
        assert_eq!(parse_coord("8,8"), Some(Coord::new(7, 7)));
        assert_eq!(parse_coord(" 2 , 5 "), Some(Coord::new(1, 4)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("e"), None);
        assert_eq!(parse_coord("e22"), None);
        assert_eq!(parse_coord("i1"), None);
        assert_eq!(parse_coord("a9"), None);
        assert_eq!(parse_coord("a0"), None);
        assert_eq!(parse_coord("0,5"), None);
        assert_eq!(parse_coord("9,1"), None);
        assert_eq!(parse_coord("2,"), None);
        assert_eq!(parse_coord("x,y"), None);
        assert_eq!(parse_coord("-1,4"), None);
    }

    #[test]
    fn test_render_starting_position() {
        let board = Board::starting_position();
        let text = render(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[2], "7 p p p p p p p p 7");
        assert_eq!(lines[3], "6 . . . . . . . . 6");
        assert_eq!(lines[7], "2 P P P P P P P P 2");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn test_render_empty_board() {
        let text = render(&Board::empty());
        for line in text.lines().skip(1).take(8) {
            assert!(line.contains(". . . . . . . ."));
        }
    }
}
