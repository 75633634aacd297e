use once_cell::sync::Lazy;

use super::super::{BoardView, MoveSet, Piece, Square};
use super::{leaper_moves, offset_table};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| offset_table(&KNIGHT_OFFSETS));

pub(super) fn knight_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    leaper_moves(piece, &KNIGHT_TARGETS[piece.square.as_index()], board)
}
