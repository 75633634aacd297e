//! Error types for board construction.
//!
//! Move generation itself never fails; these cover the fallible ways of
//! building squares and boards.

use std::fmt;

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// No placement field at all
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Empty-run digit outside 1-8
    InvalidDigit { char: char },
    /// More than eight rows
    TooManyRows { rows: usize },
    /// Fewer than eight rows
    TooFewRows { rows: usize },
    /// Too many columns in a row
    TooManyCols { row: usize, cols: usize },
    /// A row that does not add up to eight columns
    TooFewCols { row: usize, cols: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN string has no piece placement field"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidDigit { char } => {
                write!(f, "Invalid empty-square count '{char}' in FEN")
            }
            FenError::TooManyRows { rows } => {
                write!(f, "FEN placement has {rows} rows, expected 8")
            }
            FenError::TooFewRows { rows } => {
                write!(f, "FEN placement has {rows} rows, expected 8")
            }
            FenError::TooManyCols { row, cols } => {
                write!(f, "Too many columns ({cols}) in row {row}")
            }
            FenError::TooFewCols { row, cols } => {
                write!(f, "Row {row} covers only {cols} columns")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = FenError::InvalidPiece { char: 'x' };
        assert!(err.to_string().contains("'x'"));

        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }
}
