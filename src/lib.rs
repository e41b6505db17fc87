pub mod board;

pub use board::{suggest_move, Board, Color, GameStatus, Move, Piece, SearchConfig, Square};
