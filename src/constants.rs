//! Constants for search limits, evaluation weights, and move ordering.
//!
//! Every hand-tuned number the agent uses lives here under a name. The
//! runtime structs ([`Weights`](crate::evaluate::Weights),
//! [`OrderingWeights`](crate::ordering::OrderingWeights),
//! [`SearchConfig`](crate::search::SearchConfig)) take their defaults from
//! these values, so a caller can override any of them without touching code.

// =============================================================================
// Search Limits
// =============================================================================

/// Score of a decided game. Positive means the agent has won.
pub const WIN_SCORE: i32 = 100_000;

/// Initial alpha-beta window bound. Strictly larger than any evaluation.
pub const SCORE_INF: i32 = 1_000_000_000;

/// Default search depth in plies.
pub const MAX_DEPTH: u32 = 3;

/// Transposition cache entry count above which the whole table is cleared.
pub const CACHE_LIMIT: usize = 10_000;

/// Default board size for the demo binary.
pub const DEFAULT_BOARD_SIZE: usize = 9;

// =============================================================================
// Liberty Valuation (per group)
// =============================================================================

/// Group in atari (one liberty).
pub const LIBERTY_ONE: i32 = -200;

/// Group with two liberties.
pub const LIBERTY_TWO: i32 = -50;

/// Group with three liberties.
pub const LIBERTY_THREE: i32 = 20;

/// Group with four liberties.
pub const LIBERTY_FOUR: i32 = 60;

/// Group with five or more liberties.
pub const LIBERTY_MANY: i32 = 100;

/// Refined profile: extra value per liberty beyond five.
pub const LIBERTY_EXTRA: i32 = 10;

// =============================================================================
// Group Size Valuation
// =============================================================================

/// Single stone.
pub const SIZE_ONE: i32 = 10;

/// Two-stone group.
pub const SIZE_TWO: i32 = 25;

/// Per-stone value for groups of three or four stones.
pub const SIZE_MEDIUM_PER_STONE: i32 = 15;

/// Base value of a group with five or more stones.
pub const SIZE_LARGE_BASE: i32 = 60;

/// Per-stone value beyond four stones.
pub const SIZE_LARGE_PER_STONE: i32 = 10;

// =============================================================================
// Shape
// =============================================================================

/// Value per pair of adjacent stones inside one group.
pub const CONNECTIVITY_WEIGHT: i32 = 8;

/// Value per eye-potential point.
pub const EYE_WEIGHT: i32 = 15;

/// Friendly neighbour counts that earn 1, 2 and (refined only) 3 eye points.
pub const EYE_THRESHOLDS: [usize; 3] = [3, 4, 5];

// =============================================================================
// Tactics
// =============================================================================

/// Fixed part of the atari bonus (or penalty for our own group).
pub const ATARI_BASE: i32 = 300;

/// Atari bonus per stone of the group in atari.
pub const ATARI_PER_STONE: i32 = 20;

/// Bonus for each opponent group with two liberties (penalty for ours).
pub const TWO_LIBERTY_BASE: i32 = 80;

/// Refined profile: two-liberty bonus per stone.
pub const TWO_LIBERTY_PER_STONE: i32 = 10;

// =============================================================================
// Influence
// =============================================================================

/// Value of a liberty point only one colour touches.
pub const UNCONTESTED_WEIGHT: i32 = 5;

/// Value of a liberty point both colours touch. Added once, not per side.
pub const CONTESTED_WEIGHT: i32 = 1;

/// Manhattan radius around the centre for the inner influence bonus.
pub const CENTER_NEAR: usize = 3;

/// Manhattan radius around the centre for the outer influence bonus.
pub const CENTER_FAR: usize = 6;

/// Bonus for our influence points inside [`CENTER_NEAR`].
pub const CENTER_NEAR_BONUS: i32 = 8;

/// Bonus for our influence points inside [`CENTER_FAR`].
pub const CENTER_FAR_BONUS: i32 = 3;

// =============================================================================
// Refined Profile Extras
// =============================================================================

/// Opponent liberty point touching two or more distinct opponent groups.
pub const CUTTING_POINT_BONUS: i32 = 25;

/// Bonus per corner with one of our stones nearby.
pub const CORNER_BONUS: i32 = 15;

/// Chebyshev radius from a corner point that counts as "in the corner".
pub const CORNER_RADIUS: usize = 3;

// =============================================================================
// Move Ordering (scored variant)
// =============================================================================

/// Move removes the last liberty of an opponent group.
pub const ORDER_CAPTURE: i32 = 100_000;

/// Per-stone bonus for a capture.
pub const ORDER_CAPTURE_PER_STONE: i32 = 100;

/// Move leaves an opponent group with one liberty.
pub const ORDER_ATARI: i32 = 500;

/// Per-stone bonus for putting a group in atari.
pub const ORDER_ATARI_PER_STONE: i32 = 50;

/// Move leaves an opponent group with two liberties.
pub const ORDER_PRESSURE_TWO: i32 = 100;

/// Move leaves an opponent group with three liberties.
pub const ORDER_PRESSURE_THREE: i32 = 30;

/// Move extends one of our groups that is in atari.
pub const ORDER_RESCUE: i32 = 400;

/// Per-stone bonus for rescuing a group in atari.
pub const ORDER_RESCUE_PER_STONE: i32 = 40;

/// Move extends one of our groups with two liberties.
pub const ORDER_REINFORCE: i32 = 80;

/// Per step of Manhattan distance closer to the centre.
pub const ORDER_CENTER_STEP: i32 = 2;

/// Rule-based picker: penalty for a move that leaves the new stone in atari.
pub const SELF_ATARI_PENALTY: i32 = 600;
