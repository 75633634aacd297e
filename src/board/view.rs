//! Read-only access to a board grid.

use super::{Piece, Square};

/// What move generation needs from a board: the piece, if any, on a square.
///
/// `Board` is the crate's own implementation. A GUI that keeps its own grid
/// can implement this directly and call [`generate_moves`](super::generate_moves)
/// without copying into a `Board`.
pub trait BoardView {
    fn piece_at(&self, square: Square) -> Option<Piece>;

    #[inline]
    fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }
}

impl<B: BoardView + ?Sized> BoardView for &B {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        (**self).piece_at(square)
    }
}

/// A plain `[[Option<Piece>; 8]; 8]` grid indexed `[row][col]`.
impl BoardView for [[Option<Piece>; 8]; 8] {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self[square.row()][square.col()]
    }
}
