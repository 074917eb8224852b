//! Board coordinates.
//!
//! A `Coord` addresses one square as a zero-based `(row, col)` pair.
//! Row 0 is White's back rank; rows increase toward Black. Columns map to
//! files `a..h`. `Display` renders the algebraic name (`e2`).

use serde::{Deserialize, Serialize};

/// Zero-based square address.
///
/// ```
/// use rust_chess::core::Coord;
///
/// let e2 = Coord::new(1, 4);
/// assert!(e2.in_bounds());
/// assert_eq!(format!("{}", e2), "e2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. Values are not validated; use `in_bounds`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that both axes are within the 8×8 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Step by a signed delta, returning `None` if the result leaves the
    /// board (or underflows zero).
    ///
    /// ```
    /// use rust_chess::core::Coord;
    ///
    /// let d4 = Coord::new(3, 3);
    /// assert_eq!(d4.offset(1, -1), Some(Coord::new(4, 2)));
    /// assert_eq!(Coord::new(0, 0).offset(-1, 0), None);
    /// ```
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(d_row)?;
        let col = (self.col as i8).checked_add(d_col)?;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Signed row/column deltas from `self` to `other`.
    #[must_use]
    pub const fn delta(self, other: Coord) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(7, 7).in_bounds());
        assert!(!Coord::new(8, 0).in_bounds());
        assert!(!Coord::new(0, 8).in_bounds());
        assert!(!Coord::new(200, 200).in_bounds());
    }

    #[test]
    fn test_offset() {
        let c = Coord::new(3, 3);
        assert_eq!(c.offset(1, 0), Some(Coord::new(4, 3)));
        assert_eq!(c.offset(-2, 1), Some(Coord::new(1, 4)));
        assert_eq!(c.offset(5, 0), None);
        assert_eq!(Coord::new(0, 7).offset(0, 1), None);
        assert_eq!(Coord::new(0, 0).offset(-1, -1), None);
    }

    #[test]
    fn test_delta() {
        let from = Coord::new(1, 4);
        let to = Coord::new(3, 2);
        assert_eq!(from.delta(to), (2, -2));
        assert_eq!(to.delta(from), (-2, 2));
        assert_eq!(from.delta(from), (0, 0));
    }

    #[test]
    fn test_display_algebraic() {
        assert_eq!(format!("{}", Coord::new(0, 0)), "a1");
        assert_eq!(format!("{}", Coord::new(1, 4)), "e2");
        assert_eq!(format!("{}", Coord::new(7, 7)), "h8");
    }

    #[test]
    fn test_serialization() {
        let coord = Coord::new(6, 2);
        let json = serde_json::to_string(&coord).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, deserialized);
    }
}
