//! Hangman
//!
//! A console word-guessing game. The player picks a category and a
//! difficulty, then guesses the letters of a hidden word before the
//! gallows is complete.
//!
//! # Modules
//!
//! - [`game_engine`] - Word selection and round setup
//! - [`models`] - Word bank, difficulty levels and session state
//! - [`services`] - Interactive controller (menus, turn loop, replay)
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presenters for the board, menus and outcomes
//!
//! # Example
//!
//! ```rust
//! use hangman::{Difficulty, GameSession, GuessOutcome, RoundStatus};
//!
//! let mut session = GameSession::start("cat", "Purrs", Difficulty::Hard);
//! assert_eq!(session.apply_guess('c').unwrap(), GuessOutcome::Correct);
//! assert_eq!(session.status(), RoundStatus::InProgress);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::GameEngine;
pub use models::difficulty::Difficulty;
pub use models::errors::{GameError, GameResult, GuessRejection};
pub use models::session::{GameSession, GuessOutcome, HintResult, RoundStatus};
pub use models::word_bank::{Category, WordBank};
