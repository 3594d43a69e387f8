//! Minimax search with alpha-beta pruning.
//!
//! This module implements the agent's decision procedure:
//! - Depth-bounded minimax over successor boards, pruned with alpha-beta
//! - Move ordering at every node to maximise cutoffs
//! - An optional transposition cache owned by the selector
//! - Optional iterative deepening from depth 1 up to the configured depth
//!
//! Scores are always from the selector's colour's point of view: the side
//! whose colour matches maximises, the other side minimises.

use log::{debug, warn};

use crate::cache::{Bound, CacheEntry, TranspositionTable, position_key};
use crate::constants::{CACHE_LIMIT, MAX_DEPTH, SCORE_INF};
use crate::evaluate::{EvalProfile, Evaluator, Weights};
use crate::game::{Color, GoBoard, Move};
use crate::ordering::{MoveOrdering, OrderingWeights, order_moves};

/// Tunable parameters of a [`MoveSelector`].
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Deepest search in plies.
    pub max_depth: u32,
    /// Search depths 1..=max_depth in turn instead of max_depth directly.
    pub iterative_deepening: bool,
    pub use_cache: bool,
    /// Entry count at which the cache is cleared.
    pub cache_limit: usize,
    pub ordering: MoveOrdering,
    pub ordering_weights: OrderingWeights,
    pub profile: EvalProfile,
    pub weights: Weights,
    /// Seed for the fallback move choice. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            iterative_deepening: true,
            use_cache: true,
            cache_limit: CACHE_LIMIT,
            ordering: MoveOrdering::default(),
            ordering_weights: OrderingWeights::default(),
            profile: EvalProfile::default(),
            weights: Weights::default(),
            seed: None,
        }
    }
}

/// Counters for the most recent [`MoveSelector::select_move`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub cache_hits: u64,
    pub cache_stores: u64,
}

impl SearchStats {
    /// Counts accumulated since the `earlier` snapshot.
    pub fn since(&self, earlier: SearchStats) -> SearchStats {
        SearchStats {
            nodes: self.nodes.saturating_sub(earlier.nodes),
            leaves: self.leaves.saturating_sub(earlier.leaves),
            cutoffs: self.cutoffs.saturating_sub(earlier.cutoffs),
            cache_hits: self.cache_hits.saturating_sub(earlier.cache_hits),
            cache_stores: self.cache_stores.saturating_sub(earlier.cache_stores),
        }
    }
}

/// Outcome of one root search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
}

/// Chooses moves for one colour by minimax search.
pub struct MoveSelector {
    color: Color,
    config: SearchConfig,
    evaluator: Evaluator,
    cache: Option<TranspositionTable>,
    rng: fastrand::Rng,
    stats: SearchStats,
}

impl MoveSelector {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        let evaluator = Evaluator::with_weights(color, config.profile, config.weights.clone());
        let cache = config
            .use_cache
            .then(|| TranspositionTable::new(config.cache_limit));
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            color,
            config,
            evaluator,
            cache,
            rng,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn cache(&self) -> Option<&TranspositionTable> {
        self.cache.as_ref()
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// Returns `None` only when the board has no legal actions. If the
    /// search produces no move, one is drawn at random from the legal ones.
    pub fn select_move<B: GoBoard>(&mut self, board: &B) -> Option<Move> {
        let actions = board.legal_actions();
        if actions.is_empty() {
            return None;
        }
        self.stats = SearchStats::default();

        let result = if self.config.iterative_deepening {
            self.iterative_deepening(board)
        } else {
            self.search_root(board, self.config.max_depth)
        };

        match result.best_move {
            Some(mv) => Some(mv),
            None => {
                warn!(
                    "search at depth {} returned no move, choosing among {} at random",
                    result.depth,
                    actions.len()
                );
                Some(actions[self.rng.usize(..actions.len())])
            }
        }
    }

    /// Search depths 1..=max_depth, keeping the deepest result that has a
    /// move.
    pub fn iterative_deepening<B: GoBoard>(&mut self, board: &B) -> SearchResult {
        let mut best = SearchResult {
            best_move: None,
            score: self.evaluator.evaluate(board),
            depth: 0,
        };
        for depth in 1..=self.config.max_depth {
            let result = self.search_root(board, depth);
            if result.best_move.is_some() || best.best_move.is_none() {
                best = result;
            }
        }
        best
    }

    /// One full-window search to `depth`.
    pub fn search_root<B: GoBoard>(&mut self, board: &B, depth: u32) -> SearchResult {
        let maximizing = board.to_move() == self.color;
        let before = self.stats;
        let (best_move, score) = self.search(board, depth, -SCORE_INF, SCORE_INF, maximizing);
        let s = self.stats.since(before);
        debug!(
            "depth {depth}: best {best_move:?} score {score} ({} nodes, {} leaves, {} cutoffs, {} cache hits)",
            s.nodes, s.leaves, s.cutoffs, s.cache_hits
        );
        SearchResult {
            best_move,
            score,
            depth,
        }
    }

    /// Alpha-beta over the subtree rooted at `board`.
    fn search<B: GoBoard>(
        &mut self,
        board: &B,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<Move>, i32) {
        self.stats.nodes += 1;

        if depth == 0 || board.winner().is_some() {
            self.stats.leaves += 1;
            return (None, self.evaluator.evaluate(board));
        }

        let actions = board.legal_actions();
        if actions.is_empty() {
            self.stats.leaves += 1;
            return (None, self.evaluator.evaluate(board));
        }

        let key = self
            .cache
            .as_ref()
            .map(|_| position_key(board, board.to_move()));
        if let Some(key) = key {
            let hit = self.cache.as_ref().and_then(|tt| tt.get(key)).copied();
            if let Some(entry) = hit.filter(|e| e.usable(depth, alpha, beta)) {
                self.stats.cache_hits += 1;
                return (entry.best_move, entry.score);
            }
        }

        let (alpha0, beta0) = (alpha, beta);
        let ordered = order_moves(
            board,
            &actions,
            self.config.ordering,
            &self.config.ordering_weights,
        );

        let mut best_move = None;
        let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };

        for mv in ordered {
            let child = board.successor(mv);
            let (_, score) = self.search(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if let (Some(key), Some(tt)) = (key, self.cache.as_mut()) {
            let bound = if best <= alpha0 {
                Bound::Upper
            } else if best >= beta0 {
                Bound::Lower
            } else {
                Bound::Exact
            };
            tt.insert(
                key,
                CacheEntry {
                    depth,
                    score: best,
                    best_move,
                    bound,
                },
            );
            self.stats.cache_stores += 1;
        }

        (best_move, best)
    }
}
