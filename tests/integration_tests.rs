//! Integration tests for go-alphabeta
//!
//! These exercise the agent end to end on the reference capture-Go board:
//! properties that must hold for every position (legal output, ordering is a
//! permutation, pruning never changes the score) and a few hand-built
//! tactical scenarios.

use go_alphabeta::agent::{AgentConfig, Strategy};
use go_alphabeta::board::{Board, str_coord};
use go_alphabeta::cache::{Bound, CacheEntry, TranspositionTable, position_key};
use go_alphabeta::constants::WIN_SCORE;
use go_alphabeta::evaluate::{EvalProfile, Evaluator, Weights};
use go_alphabeta::game::{Color, GoBoard, Move};
use go_alphabeta::ordering::{MoveOrdering, OrderingWeights, order_moves};
use go_alphabeta::search::{MoveSelector, SearchConfig};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn position(rows: &[&str], to_move: Color) -> Board {
    Board::from_rows(rows, to_move).unwrap()
}

/// Play `plies` random legal moves from an empty board, stopping early if
/// the game ends.
fn random_position(size: usize, plies: usize, seed: u64) -> Board {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new(size);
    for _ in 0..plies {
        let moves = board.legal_actions();
        if moves.is_empty() {
            break;
        }
        board = board.play(moves[rng.usize(..moves.len())]).unwrap();
    }
    board
}

/// Random positions where the game is still running.
fn open_positions(size: usize, plies: usize, count: usize) -> Vec<Board> {
    (0..)
        .map(|seed| random_position(size, plies, seed))
        .filter(|b| b.winner().is_none())
        .take(count)
        .collect()
}

fn fixed_depth(depth: u32, ordering: MoveOrdering) -> SearchConfig {
    SearchConfig {
        max_depth: depth,
        iterative_deepening: false,
        use_cache: false,
        ordering,
        seed: Some(1),
        ..SearchConfig::default()
    }
}

/// Exhaustive minimax: no pruning, no ordering, no cache.
fn plain_minimax(eval: &Evaluator, board: &Board, depth: u32, maximizing: bool) -> i32 {
    if depth == 0 || board.winner().is_some() {
        return eval.evaluate(board);
    }
    let moves = board.legal_actions();
    if moves.is_empty() {
        return eval.evaluate(board);
    }
    let scores = moves
        .into_iter()
        .map(|mv| plain_minimax(eval, &board.successor(mv), depth - 1, !maximizing));
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn sorted(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort_by_key(|m| format!("{m:?}"));
    moves
}

/// Black to move; white (1,1) is in atari with its last liberty at (2,1).
fn capture_setup() -> Board {
    position(
        &[
            ".X.....", //
            "XO.....", //
            ".X.....", //
            ".......", //
            ".....O.", //
            "....OX.", //
            ".......",
        ],
        Color::Black,
    )
}

// =============================================================================
// Move selection properties
// =============================================================================

#[test]
fn test_selected_move_is_always_legal() {
    for (i, board) in open_positions(5, 8, 12).into_iter().enumerate() {
        let legal = board.legal_actions();
        let color = board.to_move();
        for strategy in [Strategy::Minimax, Strategy::Heuristic] {
            let config = AgentConfig {
                strategy,
                search: SearchConfig {
                    max_depth: 2,
                    seed: Some(i as u64),
                    ..SearchConfig::default()
                },
            };
            let mut agent = config.build::<Board>(color);
            let mv = agent.get_action(&board).unwrap();
            assert!(
                legal.contains(&mv),
                "{strategy:?} chose illegal {} on\n{board}",
                str_coord(mv, board.size)
            );
        }
    }
}

#[test]
fn test_no_legal_moves_returns_none() {
    let board = capture_setup();
    let finished = board.play(Move::Place((2, 1))).unwrap();
    assert_eq!(finished.winner(), Some(Color::Black));
    assert!(finished.legal_actions().is_empty());

    for strategy in [Strategy::Minimax, Strategy::Heuristic] {
        let config = AgentConfig {
            strategy,
            ..AgentConfig::default()
        };
        let mut agent = config.build::<Board>(Color::White);
        assert_eq!(agent.get_action(&finished), None);
    }
}

#[test]
fn test_depth_one_chooses_capture() {
    let board = capture_setup();
    for ordering in [MoveOrdering::Bucketed, MoveOrdering::Scored] {
        let mut selector = MoveSelector::new(Color::Black, fixed_depth(1, ordering));
        assert_eq!(
            selector.select_move(&board),
            Some(Move::Place((2, 1))),
            "{ordering:?}"
        );
    }
}

#[test]
fn test_capture_beats_rescue() {
    // Black (1,0) is in atari, but white (0,0) can be taken at (0,1) first.
    let board = position(
        &[
            "OX...", //
            ".O...", //
            ".....", //
            ".....", //
            ".....",
        ],
        Color::Black,
    );
    let mut selector = MoveSelector::new(Color::Black, fixed_depth(2, MoveOrdering::Scored));
    assert_eq!(selector.select_move(&board), Some(Move::Place((0, 1))));
}

#[test]
fn test_rescues_stone_in_atari() {
    // Black (1,0) has one liberty at (2,0) and nothing can be captured.
    let board = position(
        &[
            "OX...", //
            "OO...", //
            ".....", //
            ".....", //
            ".....",
        ],
        Color::Black,
    );
    for ordering in [MoveOrdering::Bucketed, MoveOrdering::Scored] {
        let mut selector = MoveSelector::new(Color::Black, fixed_depth(2, ordering));
        assert_eq!(
            selector.select_move(&board),
            Some(Move::Place((2, 0))),
            "{ordering:?}"
        );
    }
}

#[test]
fn test_iterative_deepening_keeps_last_depth() {
    let board = random_position(5, 6, 3);
    let color = board.to_move();
    let mut fixed = MoveSelector::new(color, fixed_depth(3, MoveOrdering::Scored));
    let expected = fixed.search_root(&board, 3).score;

    let config = SearchConfig {
        max_depth: 3,
        seed: Some(1),
        ..SearchConfig::default()
    };
    let mut selector = MoveSelector::new(color, config);
    let result = selector.iterative_deepening(&board);
    assert_eq!(result.depth, 3);
    assert_eq!(result.score, expected);
}

// =============================================================================
// Alpha-beta equivalence
// =============================================================================

#[test]
fn test_alphabeta_score_matches_minimax() {
    for board in open_positions(4, 5, 6) {
        let color = board.to_move();
        for profile in [EvalProfile::Basic, EvalProfile::Refined] {
            let eval = Evaluator::new(color, profile);
            for depth in 1..=3 {
                let expected = plain_minimax(&eval, &board, depth, true);
                for ordering in [MoveOrdering::Bucketed, MoveOrdering::Scored] {
                    for use_cache in [false, true] {
                        let config = SearchConfig {
                            profile,
                            use_cache,
                            ..fixed_depth(depth, ordering)
                        };
                        let mut selector = MoveSelector::new(color, config);
                        let got = selector.search_root(&board, depth).score;
                        assert_eq!(
                            got, expected,
                            "depth {depth} {ordering:?} {profile:?} cache={use_cache} on\n{board}"
                        );
                    }
                }
            }
        }
    }
}

// =============================================================================
// Move ordering
// =============================================================================

#[test]
fn test_ordering_is_permutation_on_random_positions() {
    let weights = OrderingWeights::default();
    for board in open_positions(7, 14, 10) {
        let moves = board.legal_actions();
        for ordering in [MoveOrdering::Bucketed, MoveOrdering::Scored] {
            let ordered = order_moves(&board, &moves, ordering, &weights);
            assert_eq!(sorted(ordered), sorted(moves.clone()));
        }
    }
}

#[test]
fn test_capture_ordered_before_non_atari_moves() {
    let board = capture_setup();
    let weights = OrderingWeights::default();
    let opponent = Color::White;

    for ordering in [MoveOrdering::Bucketed, MoveOrdering::Scored] {
        let ordered = order_moves(&board, &board.legal_actions(), ordering, &weights);
        let capture_at = ordered
            .iter()
            .position(|&m| m == Move::Place((2, 1)))
            .unwrap();
        for (i, &mv) in ordered.iter().enumerate() {
            let pt = mv.point().unwrap();
            let reduces_to_atari = board
                .liberty_groups(opponent, pt)
                .iter()
                .any(|g| g.liberty_count() <= 2);
            if !reduces_to_atari {
                assert!(capture_at < i, "{ordering:?}: capture after {mv:?}");
            }
        }
    }
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluation_negates_under_color_swap() {
    let weights = Weights::default().without_one_sided_terms();
    for board in open_positions(9, 20, 10) {
        for profile in [EvalProfile::Basic, EvalProfile::Refined] {
            let black = Evaluator::with_weights(Color::Black, profile, weights.clone());
            let white = Evaluator::with_weights(Color::White, profile, weights.clone());
            assert_eq!(black.evaluate(&board), -white.evaluate(&board), "\n{board}");
        }
    }
}

#[test]
fn test_decided_games_score_win() {
    let finished = capture_setup().play(Move::Place((2, 1))).unwrap();
    for profile in [EvalProfile::Basic, EvalProfile::Refined] {
        assert_eq!(
            Evaluator::new(Color::Black, profile).evaluate(&finished),
            WIN_SCORE
        );
        assert_eq!(
            Evaluator::new(Color::White, profile).evaluate(&finished),
            -WIN_SCORE
        );
    }
}

// =============================================================================
// Transposition cache
// =============================================================================

#[test]
fn test_cache_lookup_is_stable() {
    let board = random_position(7, 10, 9);
    let key = position_key(&board, board.to_move());
    assert_eq!(key, position_key(&board.clone(), board.to_move()));

    let mut tt = TranspositionTable::new(100);
    let entry = CacheEntry {
        depth: 3,
        score: 123,
        best_move: Some(Move::Place((3, 3))),
        bound: Bound::Exact,
    };
    tt.insert(key, entry);
    assert_eq!(tt.get(key), Some(&entry));
    assert_eq!(tt.get(key), Some(&entry));
}

#[test]
fn test_cache_overflow_misses_old_entries() {
    let mut tt = TranspositionTable::new(10);
    let entry = |score| CacheEntry {
        depth: 1,
        score,
        best_move: None,
        bound: Bound::Exact,
    };
    for key in 0..10u64 {
        tt.insert(key, entry(key as i32));
    }
    tt.insert(1000, entry(1000));
    for key in 0..10u64 {
        assert!(tt.get(key).is_none());
    }
    assert!(tt.get(1000).is_some());
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_self_play_stays_legal() {
    let mut board = Board::new(5);
    let config = AgentConfig {
        strategy: Strategy::Minimax,
        search: SearchConfig {
            max_depth: 2,
            seed: Some(42),
            ..SearchConfig::default()
        },
    };
    let mut black = config.build::<Board>(Color::Black);
    let mut white = config.build::<Board>(Color::White);

    for _ in 0..25 {
        let agent = match board.to_move() {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        let Some(mv) = agent.get_action(&board) else {
            break;
        };
        board = board.play(mv).expect("agent move must be legal");
        if board.winner().is_some() {
            break;
        }
    }
    assert!(board.stone_count(Color::Black) + board.stone_count(Color::White) > 0);
}
