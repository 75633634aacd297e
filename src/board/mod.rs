//! Chess board representation and pseudo-legal move generation.
//!
//! The board is a plain 8x8 grid of optional pieces. Move generation reads
//! any [`BoardView`] and returns the set of destination squares for one
//! piece; it never mutates the board and never fails.
//!
//! # Example
//! ```
//! use chess_movegen::board::{generate_moves, Board, Square};
//!
//! let board = Board::new();
//! let knight = board.piece_at("g1".parse::<Square>().unwrap()).unwrap();
//! let moves = generate_moves(&knight, &board);
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod movegen;
mod state;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use movegen::{can_capture, can_move, generate_moves, ray_scan, DIAGONAL, ORTHOGONAL};
pub use state::Board;
pub use types::{Color, MoveSet, Piece, PieceKind, Square, BOARD_SIZE};
pub use view::BoardView;
