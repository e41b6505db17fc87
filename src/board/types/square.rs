//! Square coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the board, represented as (row, col), zero-based from the top
/// left. Board side length is dynamic, so the upper bound is checked by the
/// grid rather than here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Get the row (0 = top edge, where Black starts)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0 = left edge)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Translate by a signed (row, col) delta. Returns `None` if either
    /// coordinate would go negative; the upper bound is the grid's concern.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: (isize, isize)) -> Option<Square> {
        let row = self.0.checked_add_signed(delta.0)?;
        let col = self.1.checked_add_signed(delta.1)?;
        Some(Square(row, col))
    }

    /// The square halfway between two squares, truncating per axis. For a
    /// jump this is the square that was jumped over.
    #[inline]
    #[must_use]
    pub const fn midpoint(a: Square, b: Square) -> Square {
        Square((a.0 + b.0) / 2, (a.1 + b.1) / 2)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
