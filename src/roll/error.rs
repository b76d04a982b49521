use super::dice::ParseDiceError;
use crate::common::Int;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("roll was cancelled")]
    Cancelled,
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("integer overflow while rolling")]
    Overflow,
    #[error("invalid dice roll {text:?}: {source}")]
    InvalidDice {
        text: String,
        #[source]
        source: ParseDiceError,
    },
    #[error("dice must have at least one side, found {0}")]
    InvalidSides(Int),
    #[error("cannot roll a negative number of dice ({0})")]
    InvalidCount(Int),
}
