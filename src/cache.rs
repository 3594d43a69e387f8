//! Transposition cache for the minimax search.
//!
//! Positions are keyed by a hash of their stones, grouped by colour, plus the
//! side to move. Each colour's groups are hashed as sorted point lists in
//! sorted order, so two boards with the same stones get the same key no
//! matter how the board enumerated its groups.
//!
//! The table has no replacement policy: once it holds `limit` entries the
//! next new key clears it completely.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use log::trace;

use crate::constants::CACHE_LIMIT;
use crate::game::{Color, GoBoard, Move, Point};

/// How a cached score relates to the true minimax value of the node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The score is the node's value at the searched depth.
    Exact,
    /// The search failed high: the value is at least the score.
    Lower,
    /// The search failed low: the value is at most the score.
    Upper,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Remaining depth the node was searched to.
    pub depth: u32,
    pub score: i32,
    pub best_move: Option<Move>,
    pub bound: Bound,
}

impl CacheEntry {
    /// Whether this entry settles a node searched to `depth` with the
    /// window `(alpha, beta)`.
    pub fn usable(&self, depth: u32, alpha: i32, beta: i32) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Structural key of `board` with `to_move` to play.
pub fn position_key<B: GoBoard>(board: &B, to_move: Color) -> u64 {
    let mut hasher = DefaultHasher::new();
    board.size().hash(&mut hasher);
    to_move.hash(&mut hasher);
    for color in [Color::Black, Color::White] {
        let mut groups: Vec<Vec<Point>> = board
            .groups(color)
            .iter()
            .map(|g| {
                let mut pts: Vec<Point> = g.points.iter().copied().collect();
                pts.sort_unstable();
                pts
            })
            .collect();
        groups.sort_unstable();
        groups.hash(&mut hasher);
    }
    hasher.finish()
}

/// Bounded map from position key to search result.
#[derive(Debug)]
pub struct TranspositionTable {
    entries: HashMap<u64, CacheEntry>,
    limit: usize,
    clears: u64,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(CACHE_LIMIT)
    }
}

impl TranspositionTable {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            limit: limit.max(1),
            clears: 0,
        }
    }

    #[inline]
    pub fn get(&self, key: u64) -> Option<&CacheEntry> {
        self.entries.get(&key)
    }

    /// Store `entry` under `key`. A new key arriving at a full table clears
    /// every existing entry first.
    pub fn insert(&mut self, key: u64, entry: CacheEntry) {
        if self.entries.len() >= self.limit && !self.entries.contains_key(&key) {
            trace!("transposition table full ({} entries), clearing", self.entries.len());
            self.clear();
            self.clears += 1;
        }
        self.entries.insert(key, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of overflow clears since creation.
    pub fn clears(&self) -> u64 {
        self.clears
    }
}
