//! The board contract the agent searches over.
//!
//! The agent never implements Go rules itself. Everything it knows about a
//! position comes through [`GoBoard`]: legal moves, successor states, the
//! winner flag, and the per-colour groups with their liberty sets.
//! [`crate::board::Board`] is one implementation; any engine that can answer
//! these queries can host the agent.

use std::collections::BTreeSet;
use std::fmt;

/// A point on the board as `(x, y)`, zero-based from the top-left corner.
pub type Point = (usize, usize);

/// Stone colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other colour.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Index for per-colour arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A legal action understood by the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Point),
    Pass,
}

impl Move {
    /// The placed point, or `None` for a pass.
    #[inline]
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Place(pt) => Some(pt),
            Move::Pass => None,
        }
    }
}

/// A maximal connected set of same-coloured stones and its liberties.
///
/// Both sets are ordered, so iteration (and hashing) is independent of the
/// order in which the board discovered the stones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group {
    pub color: Color,
    pub points: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }
}

/// Manhattan distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Read-only view of a Go position plus a successor operation.
///
/// Implementations must be deterministic: the same position always yields
/// the same legal moves in the same order. `successor` returns a new board
/// and leaves the receiver untouched.
pub trait GoBoard: Sized {
    /// Board edge length.
    fn size(&self) -> usize;

    /// Colour whose turn it is.
    fn to_move(&self) -> Color;

    /// Legal actions for the side to move. Empty when the game is over.
    fn legal_actions(&self) -> Vec<Move>;

    /// The position after `mv` is played by the side to move.
    fn successor(&self, mv: Move) -> Self;

    /// The winner, once the game has been decided.
    fn winner(&self) -> Option<Color>;

    /// All groups of one colour.
    fn groups(&self, color: Color) -> &[Group];

    /// How many liberties a stone of `color` placed at `pt` would have,
    /// counting the groups it would join.
    fn liberties_if_played(&self, pt: Point, color: Color) -> usize;

    /// Groups of `color` containing a stone at `pt` (zero or one).
    fn stone_groups(&self, color: Color, pt: Point) -> Vec<&Group> {
        self.groups(color)
            .iter()
            .filter(|g| g.points.contains(&pt))
            .collect()
    }

    /// Groups of `color` for which `pt` is currently a liberty.
    fn liberty_groups(&self, color: Color, pt: Point) -> Vec<&Group> {
        self.groups(color)
            .iter()
            .filter(|g| g.liberties.contains(&pt))
            .collect()
    }

    /// Orthogonal neighbours of `pt` that lie on the board.
    fn neighbors(&self, pt: Point) -> Vec<Point> {
        let s = self.size();
        let (x, y) = pt;
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        v
    }

    /// The centre point used by the distance heuristics.
    fn center(&self) -> Point {
        let c = self.size() / 2;
        (c, c)
    }
}
