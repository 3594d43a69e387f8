//! Reference board: a 2D grid with capture-Go rules.
//!
//! Placing a stone removes every adjacent opponent group left without
//! liberties, and the first player to capture wins the game. Suicide is
//! illegal. Groups are rebuilt by flood fill after every placement, which is
//! plenty for the board sizes the agent searches on.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::game::{Color, GoBoard, Group, Move, Point};

/// Largest board whose columns can be named with Go letters (A-Z without I).
pub const MAX_SIZE: usize = 25;

/// Errors from building boards or validating moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unsupported board size {0} (must be 1-{max})", max = MAX_SIZE)]
    InvalidSize(usize),

    #[error("row {row} has {found} points, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {ch:?} at ({x}, {y})")]
    BadCell { ch: char, x: usize, y: usize },

    #[error("group at {0:?} has no liberties")]
    NoLiberties(Point),

    #[error("point {0:?} is off the board")]
    OutOfBounds(Point),

    #[error("point {0:?} is not empty")]
    Occupied(Point),

    #[error("move at {0:?} would be suicide")]
    Suicide(Point),

    #[error("the game is already over")]
    GameOver,

    #[error("cannot parse coordinate {0:?}")]
    BadCoord(String),
}

#[derive(Clone, Debug)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
    next: Color,
    winner: Option<Color>,
    groups: [Vec<Group>; 2],
}

impl Board {
    /// An empty board with Black to move.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            next: Color::Black,
            winner: None,
            groups: [Vec::new(), Vec::new()],
        }
    }

    /// Build a position from text rows: `X` black, `O` white, `.` empty.
    /// Whitespace inside a row is ignored, so [`Display`](fmt::Display)
    /// output parses back.
    pub fn from_rows(rows: &[&str], to_move: Color) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let mut board = Board::new(size);
        board.next = to_move;
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(BoardError::RaggedRow {
                    row: y,
                    expected: size,
                    found: cells.len(),
                });
            }
            for (x, ch) in cells.into_iter().enumerate() {
                let i = board.idx(x, y);
                board.cells[i] = match ch {
                    'X' | 'x' => Some(Color::Black),
                    'O' | 'o' => Some(Color::White),
                    '.' | '+' => None,
                    _ => return Err(BoardError::BadCell { ch, x, y }),
                };
            }
        }
        board.rebuild_groups();
        for color in [Color::Black, Color::White] {
            if let Some(dead) = board.groups(color).iter().find(|g| g.liberties.is_empty()) {
                let first = dead.points.iter().next().copied().unwrap_or((0, 0));
                return Err(BoardError::NoLiberties(first));
            }
        }
        Ok(board)
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Number of stones of `color` on the board.
    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Play a move for the side to move, checking legality.
    pub fn play(&self, mv: Move) -> Result<Board, BoardError> {
        if self.winner.is_some() {
            return Err(BoardError::GameOver);
        }
        let pt = match mv {
            Move::Pass => return Ok(self.successor(Move::Pass)),
            Move::Place(pt) => pt,
        };
        let (x, y) = pt;
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds(pt));
        }
        if self.get(x, y).is_some() {
            return Err(BoardError::Occupied(pt));
        }
        if self.is_suicide(pt) {
            return Err(BoardError::Suicide(pt));
        }
        Ok(self.place(pt))
    }

    /// A stone at `pt` would have no liberties and capture nothing.
    fn is_suicide(&self, pt: Point) -> bool {
        let color = self.next;
        if self.liberties_if_played(pt, color) > 0 {
            return false;
        }
        !self
            .liberty_groups(color.opponent(), pt)
            .iter()
            .any(|g| g.liberty_count() == 1)
    }

    /// Place a stone for the side to move without validation.
    fn place(&self, pt: Point) -> Board {
        let mut next = self.clone();
        let color = self.next;
        let opp = color.opponent();
        let i = next.idx(pt.0, pt.1);
        next.cells[i] = Some(color);

        let mut to_remove: Vec<Point> = Vec::new();
        for group in self.liberty_groups(opp, pt) {
            if group.liberty_count() == 1 {
                to_remove.extend(group.points.iter().copied());
            }
        }
        for (rx, ry) in &to_remove {
            let i = next.idx(*rx, *ry);
            next.cells[i] = None;
        }
        if !to_remove.is_empty() {
            next.winner = Some(color);
        }

        next.next = opp;
        next.rebuild_groups();
        next
    }

    fn rebuild_groups(&mut self) {
        self.groups = [
            self.collect_groups(Color::Black),
            self.collect_groups(Color::White),
        ];
    }

    /// Flood-fill every group of one colour.
    fn collect_groups(&self, color: Color) -> Vec<Group> {
        let mut visited = vec![false; self.size * self.size];
        let mut groups = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                let start = self.idx(x, y);
                if visited[start] || self.cells[start] != Some(color) {
                    continue;
                }
                let mut points = BTreeSet::new();
                let mut liberties = BTreeSet::new();
                let mut stack = vec![(x, y)];
                while let Some((cx, cy)) = stack.pop() {
                    let i = self.idx(cx, cy);
                    if visited[i] {
                        continue;
                    }
                    visited[i] = true;
                    points.insert((cx, cy));
                    for (nx, ny) in self.neighbors((cx, cy)) {
                        let ni = self.idx(nx, ny);
                        match self.cells[ni] {
                            None => {
                                liberties.insert((nx, ny));
                            }
                            Some(c) if c == color && !visited[ni] => stack.push((nx, ny)),
                            _ => {}
                        }
                    }
                }
                groups.push(Group {
                    color,
                    points,
                    liberties,
                });
            }
        }
        groups
    }
}

impl GoBoard for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn to_move(&self) -> Color {
        self.next
    }

    fn legal_actions(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.get(x, y).is_none() && !self.is_suicide((x, y)) {
                    moves.push(Move::Place((x, y)));
                }
            }
        }
        moves
    }

    fn successor(&self, mv: Move) -> Self {
        match mv {
            Move::Place(pt) => self.place(pt),
            Move::Pass => {
                let mut next = self.clone();
                next.next = self.next.opponent();
                next
            }
        }
    }

    fn winner(&self) -> Option<Color> {
        self.winner
    }

    fn groups(&self, color: Color) -> &[Group] {
        &self.groups[color.index()]
    }

    fn liberties_if_played(&self, pt: Point, color: Color) -> usize {
        let mut libs: BTreeSet<Point> = BTreeSet::new();
        for n in self.neighbors(pt) {
            match self.get(n.0, n.1) {
                None => {
                    libs.insert(n);
                }
                Some(c) if c == color => {
                    for g in self.stone_groups(color, n) {
                        libs.extend(g.liberties.iter().copied());
                    }
                }
                _ => {}
            }
        }
        libs.remove(&pt);
        libs.len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate string (e.g. "D4", "pass") for a board of `size`.
///
/// Columns use letters A-Z skipping I; rows count up from the bottom edge.
pub fn parse_coord(s: &str, size: usize) -> Result<Move, BoardError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }
    let bad = || BoardError::BadCoord(s.to_string());

    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(bad)?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return Err(bad());
    }
    let mut x = (col_char as u8 - b'A') as usize;
    if col_char > 'I' {
        x -= 1;
    }
    let row: usize = chars.as_str().parse().map_err(|_| bad())?;
    if row == 0 || row > size || x >= size {
        return Err(bad());
    }
    Ok(Move::Place((x, size - row)))
}

/// Format a move as a coordinate string; `"pass"` for a pass.
pub fn str_coord(mv: Move, size: usize) -> String {
    match mv {
        Move::Pass => "pass".into(),
        Move::Place((x, y)) => {
            let mut c = b'A' + x as u8;
            if c >= b'I' {
                c += 1;
            }
            format!("{}{}", c as char, size - y)
        }
    }
}
