//! Depth-limited minimax search with skill-weighted move selection.
//!
//! The search expands a full game tree over the rules engine: every explored
//! branch applies a candidate move to its own clone of the board, so sibling
//! branches never share mutable state and need no coordination. Values
//! propagate bottom-up by plain minimax, with no pruning or caching, and the
//! root pick interpolates between uniformly random and strictly best play
//! through a skill parameter.

use rand::seq::SliceRandom;
use rand::Rng;

use super::state::Board;
use super::types::{Color, Move};

/// Value of a position where the searching side is out of moves.
pub(crate) const LOSS_SCORE: i32 = -1_000_000;
/// Value of a position where the opponent is out of moves.
pub(crate) const WIN_SCORE: i32 = 1_000_000;

/// Search settings: selection skill and lookahead depth.
///
/// `skill` is clamped into `[0, 1]`. At 0 the bot picks uniformly at random
/// without searching; at 1 it always picks a best-valued move; in between it
/// draws from the top `1 - skill` fraction of value-sorted candidates.
/// `depth` is clamped to at least 1; one unit of depth covers a full
/// bot-then-opponent round. Cost grows exponentially with depth, and the
/// branching factor spikes whenever long forced jump chains open up.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    skill: f64,
    depth: u32,
}

impl SearchConfig {
    /// Create a config, clamping `skill` into `[0, 1]` and raising `depth`
    /// to at least 1.
    #[must_use]
    pub fn new(skill: f64, depth: u32) -> Self {
        SearchConfig {
            skill: skill.clamp(0.0, 1.0),
            depth: depth.max(1),
        }
    }

    /// Uniform random move choice, no lookahead.
    #[must_use]
    pub fn random() -> Self {
        SearchConfig::new(0.0, 1)
    }

    #[must_use]
    pub fn skill(self) -> f64 {
        self.skill
    }

    #[must_use]
    pub fn depth(self) -> u32 {
        self.depth
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new(1.0, 1)
    }
}

/// A node in the game tree.
///
/// `mover` is the side whose moves are enumerated at this node, stored
/// explicitly so minimax direction is always read off the node itself:
/// the bot's nodes maximize, the opponent's minimize.
pub(crate) struct Node {
    pub(crate) mv: Option<Move>,
    pub(crate) mover: Color,
    pub(crate) value: i32,
    pub(crate) children: Vec<Node>,
}

/// Pick a move for `color` on the given board, or `None` when the side has
/// no legal move (that side has already lost; a normal game state, not a
/// failure).
///
/// Short circuits: a single legal move is returned without searching, and
/// zero skill picks uniformly among the legal moves without building a tree.
/// Otherwise the tree is expanded to `config.depth`, minimax-propagated, and
/// the root child is drawn by skill-weighted selection. All randomness comes
/// from the caller's `rng`, so seeded callers get reproducible play.
pub fn suggest_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    config: SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    let moves: Vec<Move> = board.player_moves(color).into_iter().collect();
    if moves.is_empty() {
        return None;
    }
    if moves.len() == 1 {
        return moves.into_iter().next();
    }
    if config.skill == 0.0 {
        return moves.choose(rng).cloned();
    }

    let mut root = build_tree(board, color, color, config.depth, None);
    propagate(&mut root, color);

    #[cfg(feature = "logging")]
    log::debug!(
        "search for {color}: {} candidates, depth {}, root value {}",
        root.children.len(),
        config.depth,
        root.value
    );

    select_weighted(root.children, config.skill, rng)
}

/// Expand the game tree. Each child applies one of `mover`'s legal moves to
/// a clone of `board` and recurses with the turn flipped; `depth` falls by
/// one exactly when the opponent's moves were the ones just enumerated, so
/// one depth unit spans a bot move and the reply. A node out of depth keeps
/// its static heuristic; a node whose mover is out of moves is terminal and
/// valued as a loss for the bot or a win over the stuck opponent.
pub(crate) fn build_tree(
    board: &Board,
    bot: Color,
    mover: Color,
    depth: u32,
    mv: Option<Move>,
) -> Node {
    let moves = board.player_moves(mover);
    let mut node = Node {
        mv,
        mover,
        value: board.material_balance(bot),
        children: Vec::new(),
    };

    if moves.is_empty() {
        node.value = if mover == bot { LOSS_SCORE } else { WIN_SCORE };
        return node;
    }

    if depth > 0 {
        let next_depth = if mover == bot { depth } else { depth - 1 };
        for mv in moves {
            let mut future = board.clone();
            future.perform_move(&mv);
            node.children
                .push(build_tree(&future, bot, mover.opponent(), next_depth, Some(mv)));
        }
    }

    node
}

/// Bottom-up minimax: a node where the bot is to move takes the maximum of
/// its children's propagated values, an opponent node the minimum. Leaves
/// keep their static value. Runs exactly once per node.
pub(crate) fn propagate(node: &mut Node, bot: Color) -> i32 {
    let maximizing = node.mover == bot;
    let mut propagated: Option<i32> = None;
    for child in &mut node.children {
        let value = propagate(child, bot);
        propagated = Some(match propagated {
            Some(best) if maximizing => best.max(value),
            Some(best) => best.min(value),
            None => value,
        });
    }
    if let Some(value) = propagated {
        node.value = value;
    }
    node.value
}

/// Draw from the root's children: shuffle (so equal-valued candidates
/// tie-break at random), stable-sort ascending by value, and pick uniformly
/// from index `floor(skill * n)`, clamped to `n - 1`, to the end. Skill 1
/// keeps only a best child; skill 0 keeps them all.
pub(crate) fn select_weighted<R: Rng + ?Sized>(
    mut children: Vec<Node>,
    skill: f64,
    rng: &mut R,
) -> Option<Move> {
    if children.is_empty() {
        return None;
    }
    children.shuffle(rng);
    children.sort_by_key(|node| node.value);
    let cutoff = ((skill * children.len() as f64).floor() as usize).min(children.len() - 1);
    let idx = rng.gen_range(cutoff..children.len());
    children.swap_remove(idx).mv
}
