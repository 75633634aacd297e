use std::fmt;

use super::{BoardView, Color, Piece, PieceKind, Square, BOARD_SIZE};

/// 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// The grid is the single source of truth. Every mutation goes through
/// methods that rewrite the moved piece's stored square, so
/// `piece_at(sq).map(|p| p.square) == Some(sq)` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with nothing on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        super::BoardBuilder::starting_position().build()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put a piece on `square`, returning whatever it displaced.
    pub fn place(&mut self, color: Color, kind: PieceKind, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].replace(Piece::new(color, kind, square))
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    /// Move the piece on `from` to `to` without any rule checking.
    ///
    /// Returns the piece previously standing on `to`. Does nothing and
    /// returns `None` if `from` is empty or equal to `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.square = to;
        self.squares[to.row()][to.col()].replace(piece)
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|cell| *cell)
    }

    /// Pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// First piece of the given color and kind in row-major order.
    #[must_use]
    pub fn find(&self, color: Color, kind: PieceKind) -> Option<Piece> {
        self.pieces_of(color).find(|p| p.kind == kind)
    }
}

impl BoardView for Board {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        Board::piece_at(self, square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            let line: String = cells
                .iter()
                .map(|cell| cell.map_or('.', Piece::to_fen_char))
                .collect();
            write!(f, "{line}")?;
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
