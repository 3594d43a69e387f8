//! Go-Alphabeta: a minimax Go agent with a hand-tuned evaluation.
//!
//! Given a board, the agent searches a few plies ahead with alpha-beta
//! pruning and returns a move. The rules engine is a collaborator reached
//! through the [`game::GoBoard`] trait; [`board::Board`] is a small
//! reference implementation (capture Go) used by the demo and the tests.
//!
//! ## Modules
//!
//! - [`constants`] - Search limits and every evaluation/ordering weight
//! - [`game`] - The board contract and shared types
//! - [`board`] - Reference capture-Go board
//! - [`evaluate`] - Static evaluation function
//! - [`ordering`] - Move ordering heuristics
//! - [`cache`] - Bounded transposition cache
//! - [`search`] - Minimax with alpha-beta and iterative deepening
//! - [`heuristic`] - One-ply rule-based picker
//! - [`agent`] - Common agent interface and configuration
//!
//! ## Example
//!
//! ```
//! use go_alphabeta::board::{Board, str_coord};
//! use go_alphabeta::game::Color;
//! use go_alphabeta::search::{MoveSelector, SearchConfig};
//!
//! let board = Board::new(5);
//! let config = SearchConfig { max_depth: 2, ..SearchConfig::default() };
//! let mut selector = MoveSelector::new(Color::Black, config);
//!
//! let mv = selector.select_move(&board).expect("empty board has moves");
//! println!("Best move: {}", str_coord(mv, board.size));
//! ```

pub mod agent;
pub mod board;
pub mod cache;
pub mod constants;
pub mod evaluate;
pub mod game;
pub mod heuristic;
pub mod ordering;
pub mod search;
