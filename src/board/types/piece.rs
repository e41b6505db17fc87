//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Direction vectors, as (row delta, col delta). Red sits on the bottom rows
// and advances toward row 0; Black advances the other way.
const RED_MOVES: [(isize, isize); 2] = [(-1, 1), (-1, -1)];
const BLACK_MOVES: [(isize, isize); 2] = [(1, 1), (1, -1)];
const KING_MOVES: [(isize, isize); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

const RED_CAPTURES: [(isize, isize); 2] = [(-2, 2), (-2, -2)];
const BLACK_CAPTURES: [(isize, isize); 2] = [(2, 2), (2, -2)];
const KING_CAPTURES: [(isize, isize); 4] = [(-2, 2), (-2, -2), (2, 2), (2, -2)];

/// The two sides of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Forward row direction (-1 for Red, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Promotion row on a board with the given side length
    /// (0 for Red, `size - 1` for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self, size: usize) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => size - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A checkers piece: a color plus a king flag.
///
/// Direction vectors are derived from the piece's current state alone, never
/// from a board location, so the same piece value is reusable by translation
/// anywhere on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Create an uncrowned piece (a "man")
    #[inline]
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Piece { color, king: false }
    }

    /// Create a crowned piece
    #[inline]
    #[must_use]
    pub const fn crowned(color: Color) -> Self {
        Piece { color, king: true }
    }

    /// Parse a piece from its letter (r, b, R, B)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::new(Color::Red)),
            'b' => Some(Piece::new(Color::Black)),
            'R' => Some(Piece::crowned(Color::Red)),
            'B' => Some(Piece::crowned(Color::Black)),
            _ => None,
        }
    }

    /// Convert to a single letter, uppercase for kings
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crown the piece. Idempotent; a piece never loses its crown.
    #[inline]
    pub fn promote(&mut self) {
        self.king = true;
    }

    /// Single-square movement vectors: the two forward diagonals for a man,
    /// all four diagonals for a king.
    #[inline]
    #[must_use]
    pub const fn movement_vectors(self) -> &'static [(isize, isize)] {
        if self.king {
            &KING_MOVES
        } else {
            match self.color {
                Color::Red => &RED_MOVES,
                Color::Black => &BLACK_MOVES,
            }
        }
    }

    /// Jump vectors: the movement vectors with magnitude 2.
    #[inline]
    #[must_use]
    pub const fn capture_vectors(self) -> &'static [(isize, isize)] {
        if self.king {
            &KING_CAPTURES
        } else {
            match self.color {
                Color::Red => &RED_CAPTURES,
                Color::Black => &BLACK_CAPTURES,
            }
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
