//! Domain models
//!
//! This module contains the word bank, difficulty levels and the
//! per-round session state. Models are pure data with the game rules
//! attached; they never touch the terminal.

pub mod constants;
pub mod difficulty;
pub mod errors;
pub mod session;
pub mod word_bank;
