//! Search tests: tree valuation, minimax propagation, and skill-weighted
//! selection.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::search::{
    build_tree, propagate, select_weighted, Node, LOSS_SCORE, WIN_SCORE,
};
use crate::board::{suggest_move, Board, Color, Move, SearchConfig, Square};

fn leaf(value: i32, mover: Color, tag: usize) -> Node {
    Node {
        mv: Some(Move::new(Square(0, tag))),
        mover,
        value,
        children: Vec::new(),
    }
}

#[test]
fn no_legal_moves_yields_none() {
    let board = Board::from_diagram(
        "
        .r.r
        ....
        ....
        b.b.
        ",
    );
    let mut rng = StdRng::seed_from_u64(7);
    let config = SearchConfig::new(1.0, 2);
    assert_eq!(suggest_move(&board, Color::Red, config, &mut rng), None);
    assert_eq!(suggest_move(&board, Color::Black, config, &mut rng), None);
}

#[test]
fn single_legal_move_short_circuits() {
    // The forced capture is red's only move, so it comes back even at
    // zero skill without touching the tree.
    let board = Board::from_diagram(
        "
        ......
        ......
        ...b..
        ....r.
        ......
        .r....
        ",
    );
    let mut rng = StdRng::seed_from_u64(7);
    let mv = suggest_move(&board, Color::Red, SearchConfig::random(), &mut rng).unwrap();
    assert_eq!(mv.steps(), &[Square(3, 4), Square(1, 2)]);
}

#[test]
fn zero_skill_is_roughly_uniform() {
    let board = Board::new(1);
    let mut rng = StdRng::seed_from_u64(42);
    let config = SearchConfig::random();

    let trials = 3000;
    let mut counts: HashMap<(Square, Square), u32> = HashMap::new();
    for _ in 0..trials {
        let mv = suggest_move(&board, Color::Black, config, &mut rng).unwrap();
        *counts.entry((mv.start(), mv.end())).or_default() += 1;
    }

    // Three legal openings; each should land near trials / 3
    assert_eq!(counts.values().sum::<u32>(), trials);
    assert_eq!(counts.len(), 3);
    for &count in counts.values() {
        assert!((800..=1200).contains(&count), "skewed count: {count}");
    }
}

#[test]
fn full_skill_avoids_the_recapture() {
    // Red must jump one of two black men. Taking the left one lands on
    // (2, 1), where the black man on (1, 0) recaptures; taking the right
    // one is safe. Depth 1 sees the reply and full skill never takes the
    // bait.
    let board = Board::from_diagram(
        "
        ......
        b.....
        ......
        ..b.b.
        ...r..
        ......
        ",
    );
    let config = SearchConfig::new(1.0, 1);
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mv = suggest_move(&board, Color::Red, config, &mut rng).unwrap();
        assert_eq!(mv.end(), Square(2, 5), "seed {seed} chose {mv}");
    }
}

#[test]
fn stuck_opponent_is_a_win() {
    // Black (to move) has no moves; from red's perspective that node is won
    let board = Board::from_diagram(
        "
        ....
        ....
        .r..
        .b..
        ",
    );
    let node = build_tree(&board, Color::Red, Color::Black, 1, None);
    assert_eq!(node.value, WIN_SCORE);
    assert!(node.children.is_empty());
}

#[test]
fn stuck_bot_is_a_loss() {
    let board = Board::from_diagram(
        "
        ....
        ....
        .r..
        .b..
        ",
    );
    let node = build_tree(&board, Color::Black, Color::Black, 1, None);
    assert_eq!(node.value, LOSS_SCORE);
    assert!(node.children.is_empty());
}

#[test]
fn propagation_maximizes_for_the_bot() {
    let mut root = Node {
        mv: None,
        mover: Color::Red,
        value: 0,
        children: vec![
            leaf(3, Color::Black, 0),
            leaf(-1, Color::Black, 1),
            leaf(5, Color::Black, 2),
        ],
    };
    assert_eq!(propagate(&mut root, Color::Red), 5);
}

#[test]
fn propagation_minimizes_for_the_opponent() {
    let mut root = Node {
        mv: None,
        mover: Color::Black,
        value: 0,
        children: vec![
            leaf(3, Color::Red, 0),
            leaf(-1, Color::Red, 1),
            leaf(5, Color::Red, 2),
        ],
    };
    assert_eq!(propagate(&mut root, Color::Red), -1);
}

#[test]
fn propagation_alternates_levels() {
    // Bot root over two opponent nodes: each opponent node minimizes its
    // leaves, the root maximizes the minima.
    let mut root = Node {
        mv: None,
        mover: Color::Red,
        value: 0,
        children: vec![
            Node {
                mv: Some(Move::new(Square(0, 0))),
                mover: Color::Black,
                value: 0,
                children: vec![leaf(9, Color::Red, 0), leaf(2, Color::Red, 1)],
            },
            Node {
                mv: Some(Move::new(Square(0, 1))),
                mover: Color::Black,
                value: 0,
                children: vec![leaf(4, Color::Red, 2), leaf(6, Color::Red, 3)],
            },
        ],
    };
    assert_eq!(propagate(&mut root, Color::Red), 4);
}

#[test]
fn full_skill_selects_the_best_value() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let children = vec![
            leaf(1, Color::Black, 1),
            leaf(4, Color::Black, 4),
            leaf(2, Color::Black, 2),
            leaf(3, Color::Black, 3),
        ];
        let mv = select_weighted(children, 1.0, &mut rng).unwrap();
        assert_eq!(mv.start(), Square(0, 4));
    }
}

#[test]
fn half_skill_selects_from_the_top_half() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let children = vec![
            leaf(1, Color::Black, 1),
            leaf(4, Color::Black, 4),
            leaf(2, Color::Black, 2),
            leaf(3, Color::Black, 3),
        ];
        let mv = select_weighted(children, 0.5, &mut rng).unwrap();
        assert!(mv.start() == Square(0, 3) || mv.start() == Square(0, 4));
    }
}

#[test]
fn zero_skill_selection_reaches_every_candidate() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let children = vec![
            leaf(1, Color::Black, 1),
            leaf(4, Color::Black, 4),
            leaf(2, Color::Black, 2),
            leaf(3, Color::Black, 3),
        ];
        seen.insert(select_weighted(children, 0.0, &mut rng).unwrap().start());
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn full_skill_breaks_ties_at_random() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let children = vec![
            leaf(5, Color::Black, 0),
            leaf(5, Color::Black, 1),
            leaf(5, Color::Black, 2),
        ];
        seen.insert(select_weighted(children, 1.0, &mut rng).unwrap().start());
    }
    assert!(seen.len() > 1, "tied best moves were never mixed");
}

#[test]
fn config_clamps_its_inputs() {
    let config = SearchConfig::new(1.5, 0);
    assert_eq!(config.skill(), 1.0);
    assert_eq!(config.depth(), 1);

    let config = SearchConfig::new(-0.5, 3);
    assert_eq!(config.skill(), 0.0);
    assert_eq!(config.depth(), 3);
}

#[test]
fn material_balance_weighs_kings_double() {
    let board = Board::from_diagram(
        "
        ....
        .R..
        ..b.
        b...
        ",
    );
    assert_eq!(board.material_balance(Color::Red), 0);
    assert_eq!(board.material_balance(Color::Black), 0);

    // The plain count ignores the crown
    assert_eq!(board.material_count(Color::Red), -1);
    assert_eq!(board.material_count(Color::Black), 1);
}

#[test]
fn material_balance_on_the_start_position_is_even() {
    let board = Board::new(3);
    assert_eq!(board.material_balance(Color::Red), 0);
    assert_eq!(board.material_balance(Color::Black), 0);
}

#[test]
fn deeper_search_still_returns_a_move() {
    let board = Board::new(1);
    let mut rng = StdRng::seed_from_u64(9);
    let mv = suggest_move(&board, Color::Red, SearchConfig::new(1.0, 3), &mut rng);
    assert!(mv.is_some());
}
