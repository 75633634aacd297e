//! Destination sets produced by move generation.

use std::collections::hash_set;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// Unordered set of destination squares for one piece.
///
/// Duplicates collapse, so the queen's union of line and diagonal scans needs
/// no special casing. Iteration order is unspecified; use
/// [`MoveSet::to_sorted_vec`] when a stable order matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSet {
    squares: HashSet<Square>,
}

impl MoveSet {
    #[must_use]
    pub fn new() -> Self {
        MoveSet {
            squares: HashSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, sq: Square) -> bool {
        self.squares.insert(sq)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.squares.contains(&sq)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Square> {
        self.squares.iter()
    }

    /// Every square in either set.
    #[must_use]
    pub fn union(mut self, other: MoveSet) -> MoveSet {
        self.squares.extend(other.squares);
        self
    }

    #[must_use]
    pub fn is_subset(&self, other: &MoveSet) -> bool {
        self.squares.is_subset(&other.squares)
    }

    /// Squares in row-major order (a8 first).
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Square> {
        let mut out: Vec<Square> = self.squares.iter().copied().collect();
        out.sort_unstable();
        out
    }
}

impl Extend<Square> for MoveSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        self.squares.extend(iter);
    }
}

impl FromIterator<Square> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        MoveSet {
            squares: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = hash_set::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = hash_set::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}
