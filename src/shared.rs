//! Shared board handle for applications that mutate from another thread.
//!
//! Generation only ever needs `&Board`. When the GUI's event loop owns the
//! board and workers ask for moves, `SharedBoard` holds a read guard for the
//! whole generation call so no relocation can land mid-scan.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{Board, Color, MoveSet, Piece, Square};

/// A cloneable, lock-protected board.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<RwLock<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(RwLock::new(board)))
    }

    /// Read access to the grid; writers wait until the guard drops.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.0.read()
    }

    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, Board> {
        self.0.write()
    }

    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveSet {
        self.read().moves_from(square)
    }

    #[must_use]
    pub fn moves_for_color(&self, color: Color) -> Vec<(Piece, MoveSet)> {
        self.read().moves_for_color(color)
    }

    /// Commit a move chosen by the application. See [`Board::relocate`].
    pub fn relocate(&self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.write().relocate(from, to);

        #[cfg(feature = "logging")]
        log::debug!("relocated {from} -> {to}, captured {captured:?}");

        captured
    }

    /// Copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.read().clone()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
