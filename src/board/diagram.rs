//! Text-diagram position parsing and printing.
//!
//! A diagram is one line per row, top row first: `.` for an empty square and
//! a piece letter (`r`, `b`, uppercase for kings) for an occupied one.
//! Whitespace inside a line and blank lines are ignored, so diagrams embed
//! readably in test sources:
//!
//! ```
//! use checkers_engine::board::Board;
//!
//! let board = Board::from_diagram(
//!     "
//!     . b . b
//!     . . . .
//!     . . . .
//!     r . r .
//!     ",
//! );
//! assert_eq!(board.size(), 4);
//! ```

use super::error::DiagramError;
use super::state::Board;
use super::types::{Piece, Square};

impl Board {
    /// Parse a position from a diagram.
    ///
    /// The diagram must be square with a side length of the form `2n + 2`
    /// for `n >= 1` (the same shapes [`Board::new`] produces).
    pub fn try_from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let lines: Vec<String> = diagram
            .lines()
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|line| !line.is_empty())
            .collect();

        let size = lines.len();
        if size < 4 || size % 2 != 0 {
            return Err(DiagramError::InvalidSize { size });
        }
        let rows_per_side = (size - 2) / 2;

        let mut board = Board::empty(rows_per_side);
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(DiagramError::RowWidthMismatch {
                    row,
                    width,
                    expected: size,
                });
            }
            for (col, c) in line.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(DiagramError::InvalidPiece { char: c })?;
                board.grid.place(piece, Square(row, col));
            }
        }
        Ok(board)
    }

    /// Parse a position from a diagram.
    ///
    /// # Panics
    /// Panics if the diagram is invalid. Use [`Board::try_from_diagram`] for
    /// fallible parsing.
    #[must_use]
    pub fn from_diagram(diagram: &str) -> Self {
        Self::try_from_diagram(diagram).expect("invalid board diagram")
    }

    /// Render the position as a diagram accepted by
    /// [`Board::try_from_diagram`].
    #[must_use]
    pub fn to_diagram(&self) -> String {
        let size = self.size();
        let mut out = String::with_capacity(size * (size + 1));
        for row in 0..size {
            for col in 0..size {
                match self.piece_at(Square(row, col)) {
                    Some(piece) => out.push(piece.to_char()),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out
    }
}
