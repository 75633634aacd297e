//! Board module tests.
//!
//! - `movegen.rs` - per-piece generation and the occupancy predicates
//! - `proptest.rs` - property-based tests over random boards
//! - `serialization.rs` - serde round trips (needs the `serde` feature)

#[cfg(feature = "serde")]
mod serialization;

use crate::board::{Board, MoveSet, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    let mut out: Vec<Square> = names.iter().map(|n| sq(n)).collect();
    out.sort_unstable();
    out
}

pub(super) fn moves_at(board: &Board, name: &str) -> MoveSet {
    board.moves_from(sq(name))
}
