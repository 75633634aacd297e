use super::super::{BoardView, MoveSet, Piece};
use super::can_capture;

/// Forward pushes onto empty squares plus diagonal captures.
///
/// No en passant and no promotion: a pawn on its last row simply has
/// nowhere to go.
pub(super) fn pawn_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    let mut moves = MoveSet::new();
    let color = piece.color;
    let dir = color.pawn_direction();
    let from = piece.square;

    if let Some(one) = from.offset(dir, 0).filter(|sq| board.is_empty(*sq)) {
        moves.insert(one);
        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|sq| board.is_empty(*sq)) {
                moves.insert(two);
            }
        }
    }

    for df in [-1, 1] {
        if let Some(target) = from.offset(dir, df) {
            if can_capture(color, target.coords(), board) {
                moves.insert(target);
            }
        }
    }

    moves
}
