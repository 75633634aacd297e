pub mod board;
pub mod shared;

pub use board::{generate_moves, Board, BoardView, Color, MoveSet, Piece, PieceKind, Square};
pub use shared::SharedBoard;
