use thiserror::Error;

use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Outcome, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Reset,
    Quit,
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("expected '<row> <col>', 'r' or 'q', got '{0}'")]
    Malformed(String),

    #[error("{value} is not between 1 and {max}")]
    OutOfRange { value: usize, max: usize },
}

/// Rows and columns are typed 1-based and returned 0-based.
pub fn parse_command(line: &str) -> Result<Command, ParseCommandError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Ok(Command::Empty),
        "r" | "reset" => return Ok(Command::Reset),
        "q" | "quit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(ParseCommandError::Malformed(trimmed.to_string()));
    };

    let row = parse_coordinate(row, trimmed)?;
    let col = parse_coordinate(col, trimmed)?;
    Ok(Command::Place(Position::new(row, col)))
}

fn parse_coordinate(text: &str, line: &str) -> Result<usize, ParseCommandError> {
    let value: usize = text
        .parse()
        .map_err(|_| ParseCommandError::Malformed(line.to_string()))?;
    if value == 0 || value > BOARD_SIZE {
        return Err(ParseCommandError::OutOfRange {
            value,
            max: BOARD_SIZE,
        });
    }
    Ok(value - 1)
}

pub fn render_board(board: &Board) -> String {
    let mut text = String::from("   ");
    for col in 1..=BOARD_SIZE {
        text.push_str(&format!(" {}", col));
    }
    text.push('\n');
    for (row, cells) in board.rows().iter().enumerate() {
        text.push_str(&format!(" {} ", row + 1));
        for cell in cells {
            text.push(' ');
            text.push(cell.symbol());
        }
        text.push('\n');
    }
    text
}

pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Won { by, line } => Some(format!("{} won! ({})", by, line)),
        Outcome::Tie => Some("It's a tie!".to_string()),
    }
}
