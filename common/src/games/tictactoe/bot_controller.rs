use crate::error::{GameError, GameResult};
use super::board::{Board, get_available_moves};
use super::types::{Mark, Position, Role, UTILITY_NEUTRAL, UTILITY_WIN, Utility};
use super::win_detector::compute_utility;

/// Lower than any reachable utility.
pub const SEARCH_MIN: Utility = -1000;
/// Higher than any reachable utility.
pub const SEARCH_MAX: Utility = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: Utility,
}

/// Computer's move for the current board, in `(row, col)` form.
pub fn select_move(board: &mut Board, human: Mark, computer: Mark) -> GameResult<Position> {
    select_scored_move(board, human, computer).map(|scored| scored.position)
}

/// Scans empty cells row-major and keeps the first strictly better score.
/// Returns as soon as a move is worth `UTILITY_WIN`, so among winning moves the
/// first one found wins, and ties below a win go to the earlier cell.
pub fn select_scored_move(
    board: &mut Board,
    human: Mark,
    computer: Mark,
) -> GameResult<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    let mut best_score = SEARCH_MIN;

    for position in get_available_moves(board) {
        board.set(position, computer);
        let score = minimax(board, human, computer, Role::Minimizer);
        board.clear(position);

        if score > best_score {
            best_score = score;
            best = Some(ScoredMove { position, score });
            if score == UTILITY_WIN {
                break;
            }
        }
    }

    best.ok_or(GameError::InvalidState)
}

/// Exhaustive minimax value of `board` with `role` to move.
///
/// Every exploratory placement is undone before returning, so the board is left
/// exactly as it was passed in.
pub fn minimax(board: &mut Board, human: Mark, computer: Mark, role: Role) -> Utility {
    let utility = compute_utility(board, human, computer);
    if utility != UTILITY_NEUTRAL {
        return utility;
    }
    if !board.has_empty_cell() {
        return UTILITY_NEUTRAL;
    }

    let (mark, mut value) = match role {
        Role::Maximizer => (computer, SEARCH_MIN),
        Role::Minimizer => (human, SEARCH_MAX),
    };

    for position in get_available_moves(board) {
        board.set(position, mark);
        let child = minimax(board, human, computer, role.other());
        board.clear(position);

        value = match role {
            Role::Maximizer => value.max(child),
            Role::Minimizer => value.min(child),
        };
    }

    value
}
