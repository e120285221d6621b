use thiserror::Error;

use crate::games::tictactoe::Mark;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid state: no empty cell left to play")]
    InvalidState,

    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("position ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {mark}'s turn")]
    NotYourTurn { mark: Mark },

    #[error("'{mark}' cannot be used as a player mark")]
    InvalidMark { mark: Mark },
}

pub type GameResult<T> = Result<T, GameError>;
