//! Static evaluation of a position from the agent's point of view.
//!
//! The score is a sum of hand-weighted terms, each computed for the agent
//! and for the opponent. Only the ordering of scores between sibling moves
//! matters; the magnitude has no meaning outside one search.
//!
//! Four terms favour the agent without a mirrored opponent term: contested
//! influence, centre influence, cutting points and corner presence. A
//! position evaluated for Black is therefore only the exact negation of the
//! same position evaluated for White once those weights are zeroed
//! (see [`Weights::without_one_sided_terms`]).

use std::collections::BTreeSet;

use crate::constants::*;
use crate::game::{Color, GoBoard, Group, Point, manhattan};

/// Which set of terms the evaluator applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EvalProfile {
    /// Liberties, size, connectivity, eyes, tactics and influence.
    #[default]
    Basic,
    /// Basic plus liberty/threat scaling, a third eye bucket, cutting
    /// points and corner presence.
    Refined,
}

/// Every weight the evaluator uses. Defaults come from [`crate::constants`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Weights {
    /// Per-group value for 1, 2, 3, 4 and 5+ liberties.
    pub liberty: [i32; 5],
    pub liberty_extra: i32,
    pub size_one: i32,
    pub size_two: i32,
    pub size_medium_per_stone: i32,
    pub size_large_base: i32,
    pub size_large_per_stone: i32,
    pub connectivity: i32,
    pub eye: i32,
    pub eye_thresholds: [usize; 3],
    pub atari_base: i32,
    pub atari_per_stone: i32,
    pub two_liberty_base: i32,
    pub two_liberty_per_stone: i32,
    pub uncontested: i32,
    pub contested: i32,
    pub center_near: usize,
    pub center_far: usize,
    pub center_near_bonus: i32,
    pub center_far_bonus: i32,
    pub cutting_point: i32,
    pub corner: i32,
    pub corner_radius: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            liberty: [
                LIBERTY_ONE,
                LIBERTY_TWO,
                LIBERTY_THREE,
                LIBERTY_FOUR,
                LIBERTY_MANY,
            ],
            liberty_extra: LIBERTY_EXTRA,
            size_one: SIZE_ONE,
            size_two: SIZE_TWO,
            size_medium_per_stone: SIZE_MEDIUM_PER_STONE,
            size_large_base: SIZE_LARGE_BASE,
            size_large_per_stone: SIZE_LARGE_PER_STONE,
            connectivity: CONNECTIVITY_WEIGHT,
            eye: EYE_WEIGHT,
            eye_thresholds: EYE_THRESHOLDS,
            atari_base: ATARI_BASE,
            atari_per_stone: ATARI_PER_STONE,
            two_liberty_base: TWO_LIBERTY_BASE,
            two_liberty_per_stone: TWO_LIBERTY_PER_STONE,
            uncontested: UNCONTESTED_WEIGHT,
            contested: CONTESTED_WEIGHT,
            center_near: CENTER_NEAR,
            center_far: CENTER_FAR,
            center_near_bonus: CENTER_NEAR_BONUS,
            center_far_bonus: CENTER_FAR_BONUS,
            cutting_point: CUTTING_POINT_BONUS,
            corner: CORNER_BONUS,
            corner_radius: CORNER_RADIUS,
        }
    }
}

impl Weights {
    /// Zero the terms that only ever favour the evaluating side.
    pub fn without_one_sided_terms(mut self) -> Self {
        self.contested = 0;
        self.center_near_bonus = 0;
        self.center_far_bonus = 0;
        self.cutting_point = 0;
        self.corner = 0;
        self
    }
}

/// Scores positions for one colour.
#[derive(Clone, Debug)]
pub struct Evaluator {
    pub color: Color,
    pub profile: EvalProfile,
    pub weights: Weights,
}

impl Evaluator {
    pub fn new(color: Color, profile: EvalProfile) -> Self {
        Self::with_weights(color, profile, Weights::default())
    }

    pub fn with_weights(color: Color, profile: EvalProfile, weights: Weights) -> Self {
        Self {
            color,
            profile,
            weights,
        }
    }

    #[inline]
    fn refined(&self) -> bool {
        self.profile == EvalProfile::Refined
    }

    /// Evaluate `board`. Positive favours `self.color`; a decided game
    /// scores exactly `±WIN_SCORE`.
    pub fn evaluate<B: GoBoard>(&self, board: &B) -> i32 {
        let opponent = self.color.opponent();
        match board.winner() {
            Some(c) if c == self.color => return WIN_SCORE,
            Some(_) => return -WIN_SCORE,
            None => {}
        }

        let mut score =
            self.player_score(board, self.color) - self.player_score(board, opponent);
        score += self.tactical_threats(board);
        score += self.influence(board);
        if self.refined() {
            score += self.cutting_points(board);
            score += self.corner_presence(board);
        }
        score
    }

    /// Shape and safety of every group of one colour.
    fn player_score<B: GoBoard>(&self, board: &B, color: Color) -> i32 {
        board
            .groups(color)
            .iter()
            .map(|group| {
                self.liberty_value(group.liberty_count())
                    + self.size_value(group.size())
                    + connectivity(board, group) * self.weights.connectivity
                    + self.eye_potential(board, group, color) * self.weights.eye
            })
            .sum()
    }

    fn liberty_value(&self, liberties: usize) -> i32 {
        let w = &self.weights;
        match liberties {
            0 => 0,
            1 => w.liberty[0],
            2 => w.liberty[1],
            3 => w.liberty[2],
            4 => w.liberty[3],
            n if self.refined() => w.liberty[4] + (n as i32 - 5) * w.liberty_extra,
            _ => w.liberty[4],
        }
    }

    fn size_value(&self, size: usize) -> i32 {
        let w = &self.weights;
        match size {
            0 => 0,
            1 => w.size_one,
            2 => w.size_two,
            3 | 4 => size as i32 * w.size_medium_per_stone,
            n => w.size_large_base + (n as i32 - 4) * w.size_large_per_stone,
        }
    }

    /// Eye points: adjacent liberty pairs mostly surrounded by friendly
    /// stones.
    fn eye_potential<B: GoBoard>(&self, board: &B, group: &Group, color: Color) -> i32 {
        if group.liberty_count() < 2 {
            return 0;
        }
        let [low, mid, high] = self.weights.eye_thresholds;
        let libs: Vec<Point> = group.liberties.iter().copied().collect();
        let mut potential = 0;
        for (i, &a) in libs.iter().enumerate() {
            for &b in &libs[i + 1..] {
                if manhattan(a, b) != 1 {
                    continue;
                }
                let friendly = board
                    .neighbors(a)
                    .into_iter()
                    .chain(board.neighbors(b))
                    .filter(|&n| !board.stone_groups(color, n).is_empty())
                    .count();
                potential += if self.refined() && friendly >= high {
                    3
                } else if friendly >= mid {
                    2
                } else if friendly >= low {
                    1
                } else {
                    0
                };
            }
        }
        potential
    }

    /// Groups in atari or with two liberties, on either side.
    fn tactical_threats<B: GoBoard>(&self, board: &B) -> i32 {
        let w = &self.weights;
        let threat = |group: &Group| -> i32 {
            let size = group.size() as i32;
            match group.liberty_count() {
                1 => w.atari_base + size * w.atari_per_stone,
                2 if self.refined() => w.two_liberty_base + size * w.two_liberty_per_stone,
                2 => w.two_liberty_base,
                _ => 0,
            }
        };
        let gain: i32 = board.groups(self.color.opponent()).iter().map(threat).sum();
        let loss: i32 = board.groups(self.color).iter().map(threat).sum();
        gain - loss
    }

    /// Liberty points as a proxy for territory, with a centre bonus.
    fn influence<B: GoBoard>(&self, board: &B) -> i32 {
        let w = &self.weights;
        let ours = liberty_union(board, self.color);
        let theirs = liberty_union(board, self.color.opponent());

        let only_ours = ours.difference(&theirs).count() as i32;
        let only_theirs = theirs.difference(&ours).count() as i32;
        let contested = ours.intersection(&theirs).count() as i32;

        let mut score = (only_ours - only_theirs) * w.uncontested + contested * w.contested;

        let center = board.center();
        for &pt in &ours {
            let d = manhattan(pt, center);
            if d <= w.center_near {
                score += w.center_near_bonus;
            } else if d <= w.center_far {
                score += w.center_far_bonus;
            }
        }
        score
    }

    /// Opponent liberties shared by two or more opponent groups.
    fn cutting_points<B: GoBoard>(&self, board: &B) -> i32 {
        let opponent = self.color.opponent();
        let cuts = liberty_union(board, opponent)
            .into_iter()
            .filter(|&pt| board.liberty_groups(opponent, pt).len() >= 2)
            .count() as i32;
        cuts * self.weights.cutting_point
    }

    fn corner_presence<B: GoBoard>(&self, board: &B) -> i32 {
        let last = board.size().saturating_sub(1);
        let r = self.weights.corner_radius;
        let corners = [(0, 0), (last, 0), (0, last), (last, last)];
        let stones: Vec<Point> = board
            .groups(self.color)
            .iter()
            .flat_map(|g| g.points.iter().copied())
            .collect();

        let held = corners
            .iter()
            .filter(|&&(cx, cy)| {
                stones
                    .iter()
                    .any(|&(x, y)| x.abs_diff(cx) <= r && y.abs_diff(cy) <= r)
            })
            .count() as i32;
        held * self.weights.corner
    }
}

/// Pairs of orthogonally adjacent stones within one group.
fn connectivity<B: GoBoard>(board: &B, group: &Group) -> i32 {
    if group.size() <= 1 {
        return 0;
    }
    let directed: usize = group
        .points
        .iter()
        .map(|&p| {
            board
                .neighbors(p)
                .into_iter()
                .filter(|n| group.points.contains(n))
                .count()
        })
        .sum();
    (directed / 2) as i32
}

fn liberty_union<B: GoBoard>(board: &B, color: Color) -> BTreeSet<Point> {
    board
        .groups(color)
        .iter()
        .flat_map(|g| g.liberties.iter().copied())
        .collect()
}
