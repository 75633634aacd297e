//! Pseudo-legal move generation.
//!
//! Sliders (rook, bishop, queen) share one ray scan parameterized by a
//! direction list. Knights and kings filter a precomputed offset table by
//! occupancy. Pawns have their own forward/capture rules. Nothing here looks
//! at king safety, castling, en passant or promotion.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use sliders::{ray_scan, DIAGONAL, ORTHOGONAL};

#[cfg(test)]
pub(crate) use kings::KING_OFFSETS;
#[cfg(test)]
pub(crate) use knights::KNIGHT_OFFSETS;

use super::{Board, BoardView, Color, MoveSet, Piece, PieceKind, Square};

/// True iff `pos` is on the board and holds a piece of the other color.
#[inline]
pub fn can_capture<B: BoardView + ?Sized>(color: Color, pos: (isize, isize), board: &B) -> bool {
    let (row, col) = pos;
    Square::from_coords(row, col)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|p| p.color != color)
}

/// True iff `pos` is on the board and is either empty or capturable.
#[inline]
pub fn can_move<B: BoardView + ?Sized>(color: Color, pos: (isize, isize), board: &B) -> bool {
    let (row, col) = pos;
    Square::from_coords(row, col)
        .is_some_and(|sq| board.piece_at(sq).map_or(true, |p| p.color != color))
}

/// Destinations reachable by `piece` on `board`, ignoring king safety.
///
/// Trusts `piece.square` to be where the piece actually stands. Never
/// fails: off-board and own-occupied targets are simply left out.
pub fn generate_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> MoveSet {
    let moves = match piece.kind {
        PieceKind::Pawn => pawns::pawn_moves(piece, board),
        PieceKind::Knight => knights::knight_moves(piece, board),
        PieceKind::Bishop => sliders::diagonal_moves(piece, board),
        PieceKind::Rook => sliders::line_moves(piece, board),
        PieceKind::Queen => sliders::queen_moves(piece, board),
        PieceKind::King => kings::king_moves(piece, board),
    };

    #[cfg(feature = "logging")]
    log::trace!("{piece}: {} pseudo-legal destinations", moves.len());

    moves
}

/// Keep the precomputed `targets` that `piece` may step onto.
fn leaper_moves<B: BoardView + ?Sized>(piece: &Piece, targets: &[Square], board: &B) -> MoveSet {
    targets
        .iter()
        .copied()
        .filter(|to| can_move(piece.color, to.coords(), board))
        .collect()
}

/// In-bounds squares at each `(dy, dx)` offset from every square, indexed by
/// `Square::as_index`.
fn offset_table(offsets: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            offsets
                .iter()
                .filter_map(|&(dy, dx)| from.offset(dy, dx))
                .collect()
        })
        .collect()
}

impl Piece {
    /// Shorthand for [`generate_moves`].
    #[must_use]
    pub fn moves<B: BoardView + ?Sized>(&self, board: &B) -> MoveSet {
        generate_moves(self, board)
    }
}

impl Board {
    /// Moves of whatever stands on `square`; empty if nothing does.
    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveSet {
        self.piece_at(square)
            .map(|piece| generate_moves(&piece, self))
            .unwrap_or_default()
    }

    /// Every piece of `color` paired with its destinations, row-major.
    #[must_use]
    pub fn moves_for_color(&self, color: Color) -> Vec<(Piece, MoveSet)> {
        self.pieces_of(color)
            .map(|piece| (piece, generate_moves(&piece, self)))
            .collect()
    }

    /// Whether the piece on `from` may go to `to` under the movement and
    /// occupancy rules.
    #[must_use]
    pub fn is_pseudo_legal(&self, from: Square, to: Square) -> bool {
        self.moves_from(from).contains(to)
    }
}
