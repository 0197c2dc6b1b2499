use std::fmt;

use thiserror::Error;

/// Why a guessed letter was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    /// Input was empty or longer than one character
    NotSingleCharacter,
    /// Input was a single character but not a letter
    NotALetter(char),
    /// Letter was guessed earlier in the round
    AlreadyGuessed(char),
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GuessRejection::NotSingleCharacter => write!(f, "expected exactly one character"),
            GuessRejection::NotALetter(ch) => write!(f, "'{}' is not a letter", ch),
            GuessRejection::AlreadyGuessed(ch) => write!(f, "'{}' was already guessed", ch),
        }
    }
}

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Category name not present in the word bank
    #[error("unknown category: {0}")]
    InvalidCategory(String),
    /// Difficulty text did not name a level
    #[error("unknown difficulty: {0}")]
    InvalidDifficulty(String),
    /// Guess was malformed or repeated
    #[error("invalid guess: {0}")]
    InvalidGuess(GuessRejection),
    /// Guess submitted after the round was won or lost
    #[error("the round is already over")]
    RoundFinished,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl From<GuessRejection> for GameError {
    fn from(rejection: GuessRejection) -> Self {
        GameError::InvalidGuess(rejection)
    }
}
