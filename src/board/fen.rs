use super::error::FenError;
use super::{Board, Color, PieceKind, Square, BOARD_SIZE};

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read; side to move,
    /// castling and en passant fields are accepted and ignored. FEN lists
    /// rank 8 first, which is row 0 here.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let rows: Vec<&str> = placement.split('/').collect();

        if rows.len() > BOARD_SIZE {
            return Err(FenError::TooManyRows { rows: rows.len() });
        }
        if rows.len() < BOARD_SIZE {
            return Err(FenError::TooFewRows { rows: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidDigit { char: c });
                    }
                    col += run as usize;
                } else {
                    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= BOARD_SIZE {
                        return Err(FenError::TooManyCols {
                            row,
                            cols: col + 1,
                        });
                    }
                    board.place(color, kind, Square(row, col));
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(FenError::TooManyCols { row, cols: col });
                }
            }
            if col < BOARD_SIZE {
                return Err(FenError::TooFewCols { row, cols: col });
            }
        }

        Ok(board)
    }

    /// Parse a FEN placement, panicking on malformed input.
    ///
    /// Intended for tests and fixed positions; use [`Board::try_from_fen`]
    /// for anything user supplied.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(board) => board,
            Err(e) => panic!("invalid FEN '{fen}': {e}"),
        }
    }

    /// The piece-placement field describing this board.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::new();
        for (row, cells) in self.squares.iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row + 1 < BOARD_SIZE {
                fen.push('/');
            }
        }
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn parses_starting_position() {
        let board = Board::from_fen(&format!("{START} w KQkq - 0 1"));
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen_placement(), START);
    }

    #[test]
    fn placement_only_is_enough() {
        let board = Board::from_fen("8/8/8/8/4R3/8/8/8");
        let rook = board.piece_at(Square(4, 4)).unwrap();
        assert_eq!((rook.color, rook.kind), (Color::White, PieceKind::Rook));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn reports_structural_errors() {
        assert_eq!(Board::try_from_fen("   "), Err(FenError::Empty));
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8"),
            Err(FenError::TooFewRows { rows: 7 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/8/8"),
            Err(FenError::TooManyRows { rows: 9 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/7"),
            Err(FenError::TooFewCols { row: 7, cols: 7 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/8p"),
            Err(FenError::TooManyCols { row: 7, cols: 9 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/44p"),
            Err(FenError::TooManyCols { row: 7, cols: 9 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/9"),
            Err(FenError::InvalidDigit { char: '9' })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/7x"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
    }

    #[test]
    #[should_panic(expected = "invalid FEN")]
    fn from_fen_panics_on_garbage() {
        let _ = Board::from_fen("not a fen");
    }
}
