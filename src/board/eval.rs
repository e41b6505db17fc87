//! Static evaluation.

use super::state::Board;
use super::types::Color;

impl Board {
    /// King-weighted material balance from `perspective`'s point of view:
    /// each man counts 1 and each king 2, summed over the whole grid,
    /// opponent's total subtracted. Independent of whose turn it is.
    #[must_use]
    pub fn material_balance(&self, perspective: Color) -> i32 {
        let mut own = 0;
        let mut other = 0;
        for (_, piece) in self.grid.pieces() {
            let value = if piece.is_king() { 2 } else { 1 };
            if piece.color() == perspective {
                own += value;
            } else {
                other += value;
            }
        }
        own - other
    }

    /// Unweighted piece-count balance. Drivers adjudicating turn-limited
    /// games on remaining material use this rather than the king-weighted
    /// search heuristic.
    #[must_use]
    pub fn material_count(&self, perspective: Color) -> i32 {
        let mut balance = 0;
        for (_, piece) in self.grid.pieces() {
            if piece.color() == perspective {
                balance += 1;
            } else {
                balance -= 1;
            }
        }
        balance
    }
}
