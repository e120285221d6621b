use crate::error::{GameError, GameResult};
use crate::games::SessionRng;
use crate::{debug_log, log};
use super::board::Board;
use super::bot_controller::select_scored_move;
use super::settings::TicTacToeSessionSettings;
use super::types::{Line, Mark, Outcome, Position};
use super::win_detector::outcome;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub computer_mark: Mark,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSessionSettings, rng: &mut SessionRng) -> GameResult<Self> {
        let human_mark = settings.human_mark.resolve(rng);
        Self::with_human_mark(human_mark)
    }

    pub fn with_human_mark(human_mark: Mark) -> GameResult<Self> {
        let computer_mark = human_mark
            .opponent()
            .ok_or(GameError::InvalidMark { mark: human_mark })?;

        Ok(Self {
            board: Board::new(),
            human_mark,
            computer_mark,
            current_mark: Mark::X,
            outcome: Outcome::Ongoing,
            last_move: None,
        })
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.board.is_valid_move(pos)
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> GameResult<Outcome> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        if mark == Mark::Empty {
            return Err(GameError::InvalidMark { mark });
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn { mark });
        }

        if !pos.is_on_board() {
            return Err(GameError::OutOfBounds { row: pos.row, col: pos.col });
        }

        if !self.board.is_valid_move(pos) {
            return Err(GameError::CellOccupied { row: pos.row, col: pos.col });
        }

        self.board.set(pos, mark);
        self.last_move = Some(pos);
        self.outcome = outcome(&self.board, self.human_mark, self.computer_mark);

        match self.outcome {
            Outcome::Ongoing => self.switch_turn(),
            Outcome::Won { by, line } => log!("{} won on the {}", by, line),
            Outcome::Tie => log!("Game ended in a tie"),
        }

        Ok(self.outcome)
    }

    pub fn play_human(&mut self, pos: Position) -> GameResult<Outcome> {
        self.place_mark(self.human_mark, pos)
    }

    pub fn play_computer(&mut self) -> GameResult<(Position, Outcome)> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotYourTurn { mark: self.computer_mark });
        }

        let scored = select_scored_move(&mut self.board, self.human_mark, self.computer_mark)?;
        debug_log!(
            "Computer {} plays {} with score {}",
            self.computer_mark,
            scored.position,
            scored.score
        );

        let outcome = self.place_mark(self.computer_mark, scored.position)?;
        Ok((scored.position, outcome))
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.current_mark == self.computer_mark
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.outcome {
            Outcome::Won { by, .. } => Some(by),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Clears the board for a new game with the same marks.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.outcome = Outcome::Ongoing;
        self.last_move = None;
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}
