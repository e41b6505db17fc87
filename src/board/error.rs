//! Error types for board operations.

use std::fmt;

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Side length is not of the form `2n + 2` with `n >= 1`
    InvalidSize { size: usize },
    /// A row has the wrong number of squares
    RowWidthMismatch {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// Invalid piece character
    InvalidPiece { char: char },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::InvalidSize { size } => {
                write!(f, "Diagram must have an even side length of at least 4, found {size} rows")
            }
            DiagramError::RowWidthMismatch {
                row,
                width,
                expected,
            } => {
                write!(f, "Row {row} has {width} squares, expected {expected}")
            }
            DiagramError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in diagram")
            }
        }
    }
}

impl std::error::Error for DiagramError {}
