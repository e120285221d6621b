mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, has_empty_cell};
pub use bot_controller::{SEARCH_MAX, SEARCH_MIN, ScoredMove, minimax, select_move, select_scored_move};
pub use game_state::TicTacToeGameState;
pub use settings::{MarkChoice, ParseMarkChoiceError, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, Line, LineKind, Mark, Outcome, Position, Role, UTILITY_LOSS, UTILITY_NEUTRAL,
    UTILITY_WIN, Utility,
};
pub use win_detector::{compute_utility, is_line_complete, outcome};
