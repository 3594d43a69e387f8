//! Move ordering for alpha-beta pruning.
//!
//! Orders moves so the search tries the most forcing ones first (captures,
//! ataris, rescues). Ordering is always a permutation of the input, and both
//! variants use a stable sort so ties keep the board's enumeration order.

use std::cmp::Reverse;

use crate::constants::*;
use crate::game::{Color, GoBoard, Move, manhattan};

/// How moves are ordered before each node is expanded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Captures, then defences, then threats, then everything else.
    Bucketed,
    /// Sort by a numeric urgency score (see [`move_score`]).
    #[default]
    Scored,
}

/// Bucket of a move under [`MoveOrdering::Bucketed`], in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    /// Fills the last liberty of an opponent group.
    Capture,
    /// Extends one of our groups with at most two liberties.
    Defense,
    /// Touches an opponent group with at most three liberties.
    Threat,
    Other,
}

/// Weights for [`MoveOrdering::Scored`]. Defaults come from [`crate::constants`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderingWeights {
    pub capture: i32,
    pub capture_per_stone: i32,
    pub atari: i32,
    pub atari_per_stone: i32,
    pub pressure_two: i32,
    pub pressure_three: i32,
    pub rescue: i32,
    pub rescue_per_stone: i32,
    pub reinforce: i32,
    pub center_step: i32,
}

impl Default for OrderingWeights {
    fn default() -> Self {
        Self {
            capture: ORDER_CAPTURE,
            capture_per_stone: ORDER_CAPTURE_PER_STONE,
            atari: ORDER_ATARI,
            atari_per_stone: ORDER_ATARI_PER_STONE,
            pressure_two: ORDER_PRESSURE_TWO,
            pressure_three: ORDER_PRESSURE_THREE,
            rescue: ORDER_RESCUE,
            rescue_per_stone: ORDER_RESCUE_PER_STONE,
            reinforce: ORDER_REINFORCE,
            center_step: ORDER_CENTER_STEP,
        }
    }
}

/// Order `moves` for the side to move on `board`.
pub fn order_moves<B: GoBoard>(
    board: &B,
    moves: &[Move],
    ordering: MoveOrdering,
    weights: &OrderingWeights,
) -> Vec<Move> {
    let color = board.to_move();
    let mut ordered = moves.to_vec();
    match ordering {
        MoveOrdering::Bucketed => ordered.sort_by_key(|&mv| bucket(board, color, mv)),
        MoveOrdering::Scored => {
            ordered.sort_by_cached_key(|&mv| Reverse(move_score(board, color, mv, weights)))
        }
    }
    ordered
}

/// Classify a move for `color`.
pub fn bucket<B: GoBoard>(board: &B, color: Color, mv: Move) -> Bucket {
    let Some(pt) = mv.point() else {
        return Bucket::Other;
    };

    let mut threat = false;
    for group in board.liberty_groups(color.opponent(), pt) {
        match group.liberty_count() {
            1 => return Bucket::Capture,
            2 | 3 => threat = true,
            _ => {}
        }
    }
    if board
        .liberty_groups(color, pt)
        .iter()
        .any(|g| g.liberty_count() <= 2)
    {
        return Bucket::Defense;
    }
    if threat { Bucket::Threat } else { Bucket::Other }
}

/// Urgency of a move for `color`. Higher is searched first.
///
/// Captures dominate every other term; among the rest, moves that atari or
/// press opponent groups, rescue our own, and sit near the centre score
/// higher. A pass scores zero.
pub fn move_score<B: GoBoard>(
    board: &B,
    color: Color,
    mv: Move,
    weights: &OrderingWeights,
) -> i32 {
    let Some(pt) = mv.point() else {
        return 0;
    };
    let w = weights;
    let mut score = 0;

    for group in board.liberty_groups(color.opponent(), pt) {
        let size = group.size() as i32;
        score += match group.liberty_count() - 1 {
            0 => w.capture + size * w.capture_per_stone,
            1 => w.atari + size * w.atari_per_stone,
            2 => w.pressure_two,
            3 => w.pressure_three,
            _ => 0,
        };
    }

    for group in board.liberty_groups(color, pt) {
        let size = group.size() as i32;
        score += match group.liberty_count() {
            1 => w.rescue + size * w.rescue_per_stone,
            2 => w.reinforce,
            _ => 0,
        };
    }

    let dist = manhattan(pt, board.center()) as i32;
    score += (board.size() as i32 - dist).max(0) * w.center_step;
    score
}
