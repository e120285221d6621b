use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// Game value from the computer's point of view: +1 win, -1 loss, 0 otherwise.
pub type Utility = i32;

pub const UTILITY_WIN: Utility = 1;
pub const UTILITY_LOSS: Utility = -1;
pub const UTILITY_NEUTRAL: Utility = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol.to_ascii_lowercase() {
            '-' => Some(Mark::Empty),
            'x' => Some(Mark::X),
            'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    MainDiagonal,
    AntiDiagonal,
}

/// One of the 2N+2 winning lines. `index` is meaningless for diagonals and kept at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub kind: LineKind,
    pub index: usize,
}

impl Line {
    pub fn row(index: usize) -> Self {
        Self { kind: LineKind::Row, index }
    }

    pub fn column(index: usize) -> Self {
        Self { kind: LineKind::Column, index }
    }

    pub fn main_diagonal() -> Self {
        Self { kind: LineKind::MainDiagonal, index: 0 }
    }

    pub fn anti_diagonal() -> Self {
        Self { kind: LineKind::AntiDiagonal, index: 0 }
    }

    /// Cells covered by the line, in increasing row (then column) order.
    pub fn positions(&self) -> [Position; BOARD_SIZE] {
        std::array::from_fn(|i| match self.kind {
            LineKind::Row => Position::new(self.index, i),
            LineKind::Column => Position::new(i, self.index),
            LineKind::MainDiagonal => Position::new(i, i),
            LineKind::AntiDiagonal => Position::new(i, BOARD_SIZE - 1 - i),
        })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Row => write!(f, "row {}", self.index + 1),
            LineKind::Column => write!(f, "column {}", self.index + 1),
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won { by: Mark, line: Line },
    Tie,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Which side the search is currently choosing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    pub fn other(&self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_players() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_symbols_match_board_text() {
        for mark in [Mark::Empty, Mark::X, Mark::O] {
            assert_eq!(Mark::from_symbol(mark.symbol()), Some(mark));
        }
        assert_eq!(Mark::from_symbol('X'), Some(Mark::X));
        assert_eq!(Mark::from_symbol('?'), None);
    }

    #[test]
    fn test_line_positions() {
        assert_eq!(
            Line::anti_diagonal().positions(),
            [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
        assert_eq!(
            Line::column(1).positions(),
            [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)]
        );
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(2, 2).is_on_board());
        assert!(!Position::new(3, 0).is_on_board());
        assert!(!Position::new(0, 3).is_on_board());
    }
}
