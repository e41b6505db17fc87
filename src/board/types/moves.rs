//! Move path representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A complete turn's path of squares, with the squares it captures.
///
/// `steps` always begins with the origin square, which is never removed.
/// Whenever a newly appended step lands two rows away from the previous one,
/// the jumped-over square is recorded in `captured`; that is the only
/// capture-detection rule, so `captured.len() <= steps.len() - 1` always
/// holds. A move with no captures is a simple one-square step; a move with
/// captures is a completed jump chain.
///
/// Equality and hashing cover the full path content: move generation
/// collects results into a `HashSet` and relies on structural
/// de-duplication. Extension during the recursive capture search is
/// clone-then-push, so in-flight branches never share backing storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    steps: Vec<Square>,
    captured: Vec<Square>,
}

impl Move {
    /// Seed a move at its origin square.
    #[must_use]
    pub fn new(origin: Square) -> Self {
        Move {
            steps: vec![origin],
            captured: Vec::new(),
        }
    }

    /// The origin square.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Square {
        self.steps[0]
    }

    /// The current end of the path.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Square {
        self.steps[self.steps.len() - 1]
    }

    /// Visited squares in order, origin first.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Square] {
        &self.steps
    }

    /// Squares jumped over, in capture order.
    #[inline]
    #[must_use]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    /// Returns true if this move captures at least one piece
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Append a step without validating it. A step two rows away from the
    /// current end records the jumped-over square as captured.
    pub fn push_step(&mut self, sq: Square) {
        let last = self.end();
        if last.row().abs_diff(sq.row()) == 2 {
            self.captured.push(Square::midpoint(last, sq));
        }
        self.steps.push(sq);
    }

    /// Clone the path and append one step to the copy.
    #[must_use]
    pub(crate) fn extended(&self, sq: Square) -> Move {
        let mut next = self.clone();
        next.push_step(sq);
        next
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{sq}")?;
        }
        if self.is_capture() {
            write!(f, " x{}", self.captured.len())?;
        }
        Ok(())
    }
}
