use clap::Parser;

use crate::services::game::GameOptions;

#[derive(Debug, Parser)]
#[command(name = "hangman", version, about = "Guess the hidden word one letter at a time")]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Do not clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Skip the "Press Enter to continue" pauses
    #[arg(long)]
    pub no_pause: bool,

    /// Log game events at debug level to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> GameOptions {
        GameOptions {
            clear_screen: !self.no_clear,
            pause: !self.no_pause,
        }
    }

    /// The requested seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
