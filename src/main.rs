//! Go-Alphabeta: a minimax Go agent.
//!
//! ## Usage
//!
//! - `go-alphabeta` - Self-play demo on the reference board
//! - `go-alphabeta demo --size 9 --moves 40` - Demo with explicit settings
//! - `go-alphabeta genmove --color white < board.txt` - Choose one move for
//!   a board read from stdin (`X` black, `O` white, `.` empty)
//!
//! Set `RUST_LOG=debug` to see per-depth search results.

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use go_alphabeta::agent::{AgentConfig, Strategy};
use go_alphabeta::board::{Board, MAX_SIZE, str_coord};
use go_alphabeta::constants::{DEFAULT_BOARD_SIZE, MAX_DEPTH};
use go_alphabeta::evaluate::EvalProfile;
use go_alphabeta::game::{Color, GoBoard};
use go_alphabeta::ordering::MoveOrdering;
use go_alphabeta::search::SearchConfig;

/// Number of plies the demo plays when not told otherwise.
const DEMO_MOVES: usize = 40;

/// Go-Alphabeta: a minimax Go agent
#[derive(Parser)]
#[command(name = "go-alphabeta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    agent: AgentArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Let two agents play each other on the reference board
    Demo {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Maximum number of plies to play
        #[arg(long, default_value_t = DEMO_MOVES)]
        moves: usize,
    },
    /// Read a board from stdin and print the chosen move
    Genmove {
        /// Colour to move
        #[arg(long, value_enum, default_value = "black")]
        color: ColorArg,
    },
}

#[derive(Args)]
struct AgentArgs {
    /// Search depth in plies
    #[arg(long, global = true, default_value_t = MAX_DEPTH)]
    depth: u32,
    /// Decision procedure
    #[arg(long, global = true, value_enum, default_value = "minimax")]
    strategy: StrategyArg,
    /// Move ordering used inside the search
    #[arg(long, global = true, value_enum, default_value = "scored")]
    ordering: OrderingArg,
    /// Evaluation profile
    #[arg(long, global = true, value_enum, default_value = "basic")]
    profile: ProfileArg,
    /// Disable the transposition cache
    #[arg(long, global = true)]
    no_cache: bool,
    /// Search the full depth directly instead of deepening from 1
    #[arg(long, global = true)]
    no_deepening: bool,
    /// Seed for random tie-breaking and fallback moves
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    Minimax,
    Heuristic,
}

#[derive(Copy, Clone, ValueEnum)]
enum OrderingArg {
    Bucketed,
    Scored,
}

#[derive(Copy, Clone, ValueEnum)]
enum ProfileArg {
    Basic,
    Refined,
}

impl AgentArgs {
    fn config(&self, seed_offset: u64) -> AgentConfig {
        AgentConfig {
            strategy: match self.strategy {
                StrategyArg::Minimax => Strategy::Minimax,
                StrategyArg::Heuristic => Strategy::Heuristic,
            },
            search: SearchConfig {
                max_depth: self.depth,
                iterative_deepening: !self.no_deepening,
                use_cache: !self.no_cache,
                ordering: match self.ordering {
                    OrderingArg::Bucketed => MoveOrdering::Bucketed,
                    OrderingArg::Scored => MoveOrdering::Scored,
                },
                profile: match self.profile {
                    ProfileArg::Basic => EvalProfile::Basic,
                    ProfileArg::Refined => EvalProfile::Refined,
                },
                seed: self.seed.map(|s| s.wrapping_add(seed_offset)),
                ..SearchConfig::default()
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Genmove { color }) => {
            let color = match color {
                ColorArg::Black => Color::Black,
                ColorArg::White => Color::White,
            };
            run_genmove(color, &cli.agent)
        }
        Some(Commands::Demo { size, moves }) => run_demo(size, moves, &cli.agent),
        None => run_demo(DEFAULT_BOARD_SIZE, DEMO_MOVES, &cli.agent),
    }
}

fn run_demo(size: usize, moves: usize, args: &AgentArgs) -> Result<()> {
    if size == 0 || size > MAX_SIZE {
        bail!("board size must be between 1 and {MAX_SIZE}, got {size}");
    }
    println!("Go-Alphabeta: capture Go self-play on {size}x{size}\n");

    let mut board = Board::new(size);
    let mut black = args.config(0).build::<Board>(Color::Black);
    let mut white = args.config(1).build::<Board>(Color::White);

    for ply in 1..=moves {
        let color = board.to_move();
        let agent = match color {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        let Some(mv) = agent.get_action(&board) else {
            println!("{color} has no legal moves");
            break;
        };
        println!("{ply:>3}. {color} {}", str_coord(mv, size));
        board = board
            .play(mv)
            .with_context(|| format!("agent chose an illegal move at ply {ply}"))?;

        if let Some(winner) = board.winner() {
            println!("\n{winner} wins by capture");
            break;
        }
    }

    println!("\n{board}");
    info!(
        "final stones: black {}, white {}",
        board.stone_count(Color::Black),
        board.stone_count(Color::White)
    );
    Ok(())
}

fn run_genmove(color: Color, args: &AgentArgs) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read board from stdin")?;
    let rows: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    let board = Board::from_rows(&rows, color).context("invalid board")?;

    let mut agent = args.config(0).build::<Board>(color);
    let reply = match agent.get_action(&board) {
        Some(mv) => str_coord(mv, board.size),
        None => "pass".to_string(),
    };
    println!("{reply}");
    Ok(())
}
