//! Fixed-size piece storage.

use super::types::{Piece, Square};

/// A dense rows x cols store of optional pieces.
///
/// Dimensions are fixed at construction and never change. Every accessor
/// except [`Grid::in_bounds`] requires an in-bounds square (callers in the
/// rules engine always guard first), and no operation touches any cell other
/// than the targeted one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        debug_assert!(
            self.in_bounds(sq),
            "square {sq} outside {}x{} grid",
            self.rows,
            self.cols
        );
        sq.row() * self.cols + sq.col()
    }

    /// Whether a square lies within the grid.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, sq: Square) -> bool {
        sq.row() < self.rows && sq.col() < self.cols
    }

    /// The piece at a square, or `None` for an empty square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[self.index(sq)]
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn place(&mut self, piece: Piece, sq: Square) {
        let idx = self.index(sq);
        self.cells[idx] = Some(piece);
    }

    /// Empty a square.
    pub fn remove(&mut self, sq: Square) {
        let idx = self.index(sq);
        self.cells[idx] = None;
    }

    /// Empty every square.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Grid dimensions as (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Iterate over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (Square(i / self.cols, i % self.cols), piece)))
    }
}
