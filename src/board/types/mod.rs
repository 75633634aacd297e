//! Core chess types.
//!
//! This module contains the fundamental types used by move generation:
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a bounds-checked (row, col) board coordinate
//! - `MoveSet` - the destinations generated for one piece

mod move_set;
mod piece;
mod square;

pub use move_set::MoveSet;
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
