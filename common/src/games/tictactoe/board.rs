use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of `x`/`o`/`-` symbols. Panics on malformed input.
    #[cfg(test)]
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            assert_eq!(symbols.len(), BOARD_SIZE, "row {} has wrong length", row);
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = Mark::from_symbol(symbol)
                    .unwrap_or_else(|| panic!("invalid symbol '{}'", symbol));
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    /// Writes a mark without any legality check. Callers validate with `is_valid_move`.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|&cell| cell == Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

/// Empty cells in row-major order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn has_empty_cell(board: &Board) -> bool {
    board.has_empty_cell()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
