use once_cell::sync::Lazy;

use super::super::{BoardView, MoveSet, Piece, Square};
use super::{leaper_moves, offset_table};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
];

static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| offset_table(&KING_OFFSETS));

/// One step in any direction. No castling.
pub(super) fn king_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    leaper_moves(piece, &KING_TARGETS[piece.square.as_index()], board)
}
