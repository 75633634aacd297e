//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is the top of the board as drawn (Black's back rank, rank 8) and
/// row 7 is White's back rank. Column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square(pub(crate) usize, pub(crate) usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, `None` when off the board.
    #[inline]
    #[must_use]
    pub fn from_coords(row: isize, col: isize) -> Option<Self> {
        if in_bounds(row, col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Signed (row, col) pair, the form the occupancy predicates take.
    #[inline]
    #[must_use]
    pub const fn coords(self) -> (isize, isize) {
        (self.0 as isize, self.1 as isize)
    }

    /// The square `dy` rows and `dx` columns away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dy: isize, dx: isize) -> Option<Self> {
        Self::from_coords(self.0 as isize + dy, self.1 as isize + dx)
    }

    /// Get the square's index (0-63, row-major from a8)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Create a square from an index (0-63), `None` past the last square
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < BOARD_SIZE * BOARD_SIZE {
            Some(Square(idx / BOARD_SIZE, idx % BOARD_SIZE))
        } else {
            None
        }
    }

    /// Iterate every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|idx| Square(idx / BOARD_SIZE, idx % BOARD_SIZE))
    }
}

#[inline]
fn in_bounds(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => BOARD_SIZE - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_notation_maps_rank_eight_to_row_zero() {
        assert_eq!("a8".parse::<Square>(), Ok(Square(0, 0)));
        assert_eq!("e2".parse::<Square>(), Ok(Square(6, 4)));
        assert_eq!("h1".parse::<Square>(), Ok(Square(7, 7)));
        assert_eq!(Square(6, 4).to_string(), "e2");
    }

    #[test]
    fn rejects_bad_notation() {
        for bad in ["", "e", "e9", "i1", "e22", "E2"] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square(1, 2)));
        assert_eq!(Square(7, 7).offset(1, 1), None);
    }

    #[test]
    fn try_from_reports_which_axis() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((3, 9)),
            Err(SquareError::ColOutOfBounds { col: 9 })
        );
        assert_eq!(Square::try_from((3, 4)), Ok(Square(3, 4)));
    }

    #[test]
    fn from_index_rejects_indices_past_h1() {
        assert_eq!(Square::from_index(0), Some(Square(0, 0)));
        assert_eq!(Square::from_index(63), Some(Square(7, 7)));
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::from_index(81), None);
    }

    #[test]
    fn all_covers_every_square_once() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }
}
