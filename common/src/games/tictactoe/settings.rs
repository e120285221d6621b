use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::games::SessionRng;
use super::types::Mark;

/// Which mark the human plays. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkChoice {
    #[default]
    X,
    O,
    Random,
}

impl MarkChoice {
    pub fn resolve(&self, rng: &mut SessionRng) -> Mark {
        match self {
            MarkChoice::X => Mark::X,
            MarkChoice::O => Mark::O,
            MarkChoice::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mark '{0}', expected x, o or random")]
pub struct ParseMarkChoiceError(pub String);

impl FromStr for MarkChoice {
    type Err = ParseMarkChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(MarkChoice::X),
            "o" => Ok(MarkChoice::O),
            "random" => Ok(MarkChoice::Random),
            _ => Err(ParseMarkChoiceError(s.to_string())),
        }
    }
}

impl fmt::Display for MarkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkChoice::X => write!(f, "x"),
            MarkChoice::O => write!(f, "o"),
            MarkChoice::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub human_mark: MarkChoice,
}
