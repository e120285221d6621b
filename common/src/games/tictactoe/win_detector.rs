use super::board::Board;
use super::types::{
    BOARD_SIZE, Line, Mark, Outcome, UTILITY_LOSS, UTILITY_NEUTRAL, UTILITY_WIN, Utility,
};

/// First complete line held by `mark`.
///
/// Scan order is main diagonal, anti-diagonal, then row `i` and column `i` for
/// ascending `i`. When several lines are complete only the first one is reported.
pub fn is_line_complete(board: &Board, mark: Mark) -> Option<Line> {
    if mark == Mark::Empty {
        return None;
    }

    let main_diagonal = Line::main_diagonal();
    if is_line_owned(board, main_diagonal, mark) {
        return Some(main_diagonal);
    }
    let anti_diagonal = Line::anti_diagonal();
    if is_line_owned(board, anti_diagonal, mark) {
        return Some(anti_diagonal);
    }

    for i in 0..BOARD_SIZE {
        let row = Line::row(i);
        if is_line_owned(board, row, mark) {
            return Some(row);
        }
        let column = Line::column(i);
        if is_line_owned(board, column, mark) {
            return Some(column);
        }
    }

    None
}

fn is_line_owned(board: &Board, line: Line, mark: Mark) -> bool {
    line.positions()
        .iter()
        .all(|&pos| board.get(pos) == Some(mark))
}

/// Human line is checked before the computer's, so the human wins a double completion.
pub fn compute_utility(board: &Board, human: Mark, computer: Mark) -> Utility {
    if is_line_complete(board, human).is_some() {
        return UTILITY_LOSS;
    }
    if is_line_complete(board, computer).is_some() {
        return UTILITY_WIN;
    }
    UTILITY_NEUTRAL
}

pub fn outcome(board: &Board, human: Mark, computer: Mark) -> Outcome {
    if let Some(line) = is_line_complete(board, human) {
        return Outcome::Won { by: human, line };
    }
    if let Some(line) = is_line_complete(board, computer) {
        return Outcome::Won { by: computer, line };
    }
    if board.has_empty_cell() {
        Outcome::Ongoing
    } else {
        Outcome::Tie
    }
}
