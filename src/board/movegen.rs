//! Legal move enumeration.
//!
//! Captures are mandatory and maximal: a jump chain must keep extending as
//! long as a jump is available from its current end, and a side with any
//! capture available anywhere may only play captures that turn. Results are
//! sets; [`Move`] hashes by its full path, so structurally identical chains
//! de-duplicate.

use std::collections::HashSet;

use super::state::Board;
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// All legal moves for the piece at `sq`. Returns the empty set when the
    /// square is empty or off the board.
    ///
    /// Jump chains are returned only in maximal form: a chain that still
    /// admits a further capture from its final step is never emitted on its
    /// own. Simple one-square moves are offered only when the piece has no
    /// capture at all.
    #[must_use]
    pub fn piece_moves(&self, sq: Square) -> HashSet<Move> {
        let mut moves = HashSet::new();
        if !self.in_bounds(sq) {
            return moves;
        }
        let Some(piece) = self.piece_at(sq) else {
            return moves;
        };

        let seed = Move::new(sq);
        let chains = self.capture_chains(&seed, piece);
        if !chains.is_empty() {
            return chains;
        }

        for &delta in piece.movement_vectors() {
            if let Some(dest) = sq.offset(delta) {
                if self.in_bounds(dest) && self.piece_at(dest).is_none() {
                    moves.insert(seed.extended(dest));
                }
            }
        }
        moves
    }

    /// Recursive jump search: try every capture vector of `piece` from the
    /// chain's current end, extending a copy of the chain per legal jump. A
    /// chain is emitted only when nothing extends it and it contains at
    /// least one actual jump.
    fn capture_chains(&self, mv: &Move, piece: Piece) -> HashSet<Move> {
        let mut chains = HashSet::new();
        let end = mv.end();
        for &delta in piece.capture_vectors() {
            let Some(dest) = end.offset(delta) else {
                continue;
            };
            if self.can_extend_capture(mv, dest) {
                chains.extend(self.capture_chains(&mv.extended(dest), piece));
            }
        }
        if chains.is_empty() && mv.steps().len() > 1 {
            chains.insert(mv.clone());
        }
        chains
    }

    /// Whether jumping from `mv`'s current end to `dest` is a legal single
    /// capture step: `dest` must be an empty in-bounds square, and the
    /// jumped-over square must hold an enemy of the piece at `mv`'s origin
    /// that the chain has not already captured. Re-jumping a piece that is
    /// still pending removal is never legal.
    #[must_use]
    pub fn can_extend_capture(&self, mv: &Move, dest: Square) -> bool {
        if !self.in_bounds(dest) || self.piece_at(dest).is_some() {
            return false;
        }
        let Some(mover) = self.piece_at(mv.start()) else {
            return false;
        };
        let jumped_sq = Square::midpoint(mv.end(), dest);
        let Some(jumped) = self.piece_at(jumped_sq) else {
            return false;
        };
        if mv.captured().contains(&jumped_sq) {
            return false;
        }
        jumped.color() != mover.color()
    }

    /// All legal moves for a side, with the forced-capture rule applied: if
    /// any of the side's pieces can capture, only capturing moves are
    /// returned, discarding every simple move across the whole side.
    #[must_use]
    pub fn player_moves(&self, color: Color) -> HashSet<Move> {
        let mut capture_moves = HashSet::new();
        let mut simple_moves = HashSet::new();
        for (sq, piece) in self.grid.pieces() {
            if piece.color() != color {
                continue;
            }
            let moves = self.piece_moves(sq);
            // piece_moves yields either only captures or only simple moves
            if moves.iter().any(Move::is_capture) {
                capture_moves.extend(moves);
            } else {
                simple_moves.extend(moves);
            }
        }
        if capture_moves.is_empty() {
            simple_moves
        } else {
            capture_moves
        }
    }

    /// The distinct squares holding pieces of `color` that have at least one
    /// legal move this turn. Useful to UI layers highlighting which pieces
    /// may be picked up.
    #[must_use]
    pub fn movable_pieces(&self, color: Color) -> HashSet<Square> {
        self.player_moves(color)
            .iter()
            .map(Move::start)
            .collect()
    }
}
