//! Rule-based one-ply move picker.
//!
//! The cheap alternative to the minimax search: rank every legal move with
//! the same urgency score the search uses for ordering, refuse self-atari,
//! and take the best. Ties are broken by the picker's own RNG.

use crate::constants::SELF_ATARI_PENALTY;
use crate::game::{Color, GoBoard, Move};
use crate::ordering::{Bucket, OrderingWeights, bucket, move_score};

pub struct HeuristicPicker {
    color: Color,
    weights: OrderingWeights,
    self_atari_penalty: i32,
    rng: fastrand::Rng,
}

impl HeuristicPicker {
    pub fn new(color: Color, weights: OrderingWeights, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            color,
            weights,
            self_atari_penalty: SELF_ATARI_PENALTY,
            rng,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Urgency of `mv`, minus a penalty when the new stone would be left
    /// with one liberty or none without capturing anything.
    pub fn score_move<B: GoBoard>(&self, board: &B, mv: Move) -> i32 {
        let mut score = move_score(board, self.color, mv, &self.weights);
        if let Some(pt) = mv.point() {
            let captures = bucket(board, self.color, mv) == Bucket::Capture;
            if !captures && board.liberties_if_played(pt, self.color) <= 1 {
                score -= self.self_atari_penalty;
            }
        }
        score
    }

    /// The highest-scoring legal move, or `None` when there are none.
    pub fn pick<B: GoBoard>(&mut self, board: &B) -> Option<Move> {
        let scored: Vec<(Move, i32)> = board
            .legal_actions()
            .into_iter()
            .map(|mv| (mv, self.score_move(board, mv)))
            .collect();
        let top = scored.iter().map(|&(_, s)| s).max()?;
        let ties: Vec<Move> = scored
            .into_iter()
            .filter(|&(_, s)| s == top)
            .map(|(mv, _)| mv)
            .collect();
        Some(ties[self.rng.usize(..ties.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_picks_capture() {
        let board = Board::from_rows(
            &[
                ".X...", //
                "XO...", //
                ".X...", //
                ".....", //
                ".....",
            ],
            Color::Black,
        )
        .unwrap();
        let mut picker = HeuristicPicker::new(Color::Black, OrderingWeights::default(), Some(1));
        assert_eq!(picker.pick(&board), Some(Move::Place((2, 1))));
    }

    #[test]
    fn test_avoids_self_atari() {
        // Black at (0,0) would have no liberties.
        let board = Board::from_rows(
            &[
                ".O...", //
                "O....", //
                ".....", //
                ".....", //
                ".....",
            ],
            Color::Black,
        )
        .unwrap();
        let picker = HeuristicPicker::new(Color::Black, OrderingWeights::default(), Some(1));
        let open = picker.score_move(&board, Move::Place((2, 2)));
        assert!(picker.score_move(&board, Move::Place((0, 0))) < open);
        let mut picker = picker;
        assert_ne!(picker.pick(&board), Some(Move::Place((0, 0))));
    }

    #[test]
    fn test_ties_stay_legal() {
        let board = Board::new(4);
        let legal = board.legal_actions();
        let mut picker = HeuristicPicker::new(Color::Black, OrderingWeights::default(), Some(3));
        for _ in 0..10 {
            assert!(legal.contains(&picker.pick(&board).unwrap()));
        }
    }

    #[test]
    fn test_no_moves() {
        let won = Board::from_rows(&[".X.", "XO.", ".X."], Color::Black)
            .unwrap()
            .successor(Move::Place((2, 1)));
        let mut picker = HeuristicPicker::new(Color::White, OrderingWeights::default(), None);
        assert_eq!(picker.pick(&won), None);
    }
}
