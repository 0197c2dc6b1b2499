//! Round setup
//!
//! The GameEngine owns the word bank and the random source used to draw
//! secret words, and hands out a fresh [`GameSession`] for every round.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::models::difficulty::Difficulty;
use crate::models::errors::GameResult;
use crate::models::session::GameSession;
use crate::models::word_bank::WordBank;

pub struct GameEngine {
    bank: WordBank,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine over the built-in word bank
    ///
    /// # Arguments
    ///
    /// * `seed` - Random number generator seed for word selection
    pub fn new(seed: u64) -> Self {
        Self::with_bank(WordBank::builtin(), seed)
    }

    pub fn with_bank(bank: WordBank, seed: u64) -> Self {
        Self {
            bank,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Category names in menu order
    pub fn categories(&self) -> Vec<&str> {
        self.bank.categories()
    }

    /// Draws a word from `category` and starts a round at `difficulty`
    ///
    /// # Errors
    ///
    /// `InvalidCategory` if the bank has no category by that name.
    pub fn start_round(&mut self, category: &str, difficulty: Difficulty) -> GameResult<GameSession> {
        let (word, hint) = self.bank.pick_random(category, &mut self.rng)?;
        info!(
            category,
            %difficulty,
            word_length = word.len(),
            "round started"
        );
        Ok(GameSession::start(word, hint, difficulty))
    }
}
