//! Checkers board representation and game logic.
//!
//! The board is a dense grid of optional pieces. Captures are mandatory and
//! chain until exhausted; move generation returns whole chains as single
//! [`Move`] values, and a side that can capture anywhere may only capture.
//! The board tracks no turn of its own; callers alternate colors and ask
//! what each side can legally do.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color};
//!
//! let board = Board::new(3);
//! let moves = board.player_moves(Color::Red);
//! println!("Red has {} opening moves", moves.len());
//! ```

mod diagram;
mod error;
mod eval;
mod grid;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::DiagramError;
pub use grid::Grid;
pub use state::{Board, GameStatus};
pub use types::{Color, Move, Piece, Square};

// Public API - search entry point and configuration
pub use search::{suggest_move, SearchConfig};
