//! The caller-facing agent interface.
//!
//! A game loop only needs [`Agent::get_action`]. Which decision procedure
//! sits behind it (the minimax [`MoveSelector`] or the one-ply
//! [`HeuristicPicker`]) is chosen by [`AgentConfig::strategy`].

use crate::game::{Color, GoBoard, Move};
use crate::heuristic::HeuristicPicker;
use crate::search::{MoveSelector, SearchConfig};

pub trait Agent<B: GoBoard> {
    /// Colour this agent plays.
    fn color(&self) -> Color;

    /// Choose a move, or `None` when `board` has no legal actions and the
    /// caller should pass or end the game.
    fn get_action(&mut self, board: &B) -> Option<Move>;
}

impl<B: GoBoard> Agent<B> for MoveSelector {
    fn color(&self) -> Color {
        MoveSelector::color(self)
    }

    fn get_action(&mut self, board: &B) -> Option<Move> {
        self.select_move(board)
    }
}

impl<B: GoBoard> Agent<B> for HeuristicPicker {
    fn color(&self) -> Color {
        HeuristicPicker::color(self)
    }

    fn get_action(&mut self, board: &B) -> Option<Move> {
        self.pick(board)
    }
}

/// Decision procedure behind an [`Agent`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Alpha-beta minimax search.
    #[default]
    Minimax,
    /// One-ply rule-based picker.
    Heuristic,
}

#[derive(Clone, Debug, Default)]
pub struct AgentConfig {
    pub strategy: Strategy,
    /// Search settings. The heuristic picker only reads the ordering
    /// weights and the seed.
    pub search: SearchConfig,
}

impl AgentConfig {
    /// Build an agent playing `color`.
    pub fn build<B: GoBoard>(&self, color: Color) -> Box<dyn Agent<B>> {
        match self.strategy {
            Strategy::Minimax => Box::new(MoveSelector::new(color, self.search.clone())),
            Strategy::Heuristic => Box::new(HeuristicPicker::new(
                color,
                self.search.ordering_weights.clone(),
                self.search.seed,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_both_strategies_take_capture() {
        let board = Board::from_rows(&[".X..", "XO..", ".X..", "...."], Color::Black).unwrap();
        for strategy in [Strategy::Minimax, Strategy::Heuristic] {
            let config = AgentConfig {
                strategy,
                search: SearchConfig {
                    max_depth: 2,
                    seed: Some(5),
                    ..SearchConfig::default()
                },
            };
            let mut agent = config.build::<Board>(Color::Black);
            assert_eq!(agent.color(), Color::Black);
            assert_eq!(
                agent.get_action(&board),
                Some(Move::Place((2, 1))),
                "{strategy:?}"
            );
        }
    }
}
