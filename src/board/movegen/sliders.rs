use super::super::{BoardView, MoveSet, Piece};
use super::{can_capture, can_move};

/// Rook directions as `(dy, dx)`.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions as `(dy, dx)`.
pub const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// Walk from `piece.square` along each direction until blocked.
///
/// A square holding an opposing piece ends its ray and is included; one
/// holding a friendly piece, or the board edge, ends it without being
/// included.
pub fn ray_scan<B: BoardView + ?Sized>(
    piece: &Piece,
    directions: &[(isize, isize)],
    board: &B,
) -> MoveSet {
    let mut moves = MoveSet::new();

    for &(dy, dx) in directions {
        let mut next = piece.square.offset(dy, dx);
        while let Some(to) = next {
            if !can_move(piece.color, to.coords(), board) {
                break;
            }
            moves.insert(to);
            if can_capture(piece.color, to.coords(), board) {
                break;
            }
            next = to.offset(dy, dx);
        }
    }
    moves
}

pub(super) fn line_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    ray_scan(piece, &ORTHOGONAL, board)
}

pub(super) fn diagonal_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    ray_scan(piece, &DIAGONAL, board)
}

pub(super) fn queen_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    line_moves(piece, board).union(diagonal_moves(piece, board))
}
