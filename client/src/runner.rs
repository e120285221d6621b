use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tictactoe_common::GameError;
use tictactoe_common::games::tictactoe::{Mark, Outcome, TicTacToeGameState};
use tictactoe_common::{debug_log, log};

use crate::terminal::{Command, describe_outcome, parse_command, render_board};

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }

    fn record(&mut self, outcome: &Outcome, human_mark: Mark) {
        match outcome {
            Outcome::Won { by, .. } if *by == human_mark => self.human_wins += 1,
            Outcome::Won { .. } => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Ongoing => {}
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: you {}, computer {}, ties {}",
            self.games(),
            self.human_wins,
            self.computer_wins,
            self.ties
        )
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Blocks at the game-over prompt until Enter or `r` (replay) or `q` / end of input (stop).
fn wait_for_replay<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        writeln!(output, "Press Enter to play again or 'q' to quit.")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match parse_command(&line) {
            Ok(Command::Empty | Command::Reset) => return Ok(true),
            Ok(Command::Quit) => return Ok(false),
            Ok(Command::Place(_)) => {}
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

/// Plays games until the player quits or input ends, returning the tally.
pub fn run_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
) -> Result<Scoreboard, RunnerError> {
    let mut scoreboard = Scoreboard::default();

    writeln!(
        output,
        "You play {}. Enter moves as '<row> <col>', 'r' to restart, 'q' to quit.",
        state.human_mark
    )?;

    loop {
        if state.is_computer_turn() {
            let (pos, _) = state.play_computer()?;
            writeln!(
                output,
                "Computer ({}) plays {} {}",
                state.computer_mark,
                pos.row + 1,
                pos.col + 1
            )?;
            continue;
        }

        if let Some(message) = describe_outcome(&state.outcome) {
            scoreboard.record(&state.outcome, state.human_mark);
            write!(output, "{}", render_board(&state.board))?;
            writeln!(output, "{}", message)?;

            if !wait_for_replay(input, output)? {
                break;
            }
            state.reset();
            writeln!(output, "New game.")?;
            continue;
        }

        write!(output, "{}> ", render_board(&state.board))?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };

        match parse_command(&line) {
            Err(err) => writeln!(output, "{}", err)?,
            Ok(Command::Empty) => {}
            Ok(Command::Quit) => break,
            Ok(Command::Reset) => {
                state.reset();
                debug_log!("Game reset by player");
                writeln!(output, "New game.")?;
            }
            Ok(Command::Place(pos)) => match state.play_human(pos) {
                Ok(_) => {}
                Err(GameError::CellOccupied { .. }) => {
                    writeln!(output, "That cell is already taken.")?;
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    writeln!(output, "{}", scoreboard)?;
    log!("Session finished, {}", scoreboard);
    Ok(scoreboard)
}
