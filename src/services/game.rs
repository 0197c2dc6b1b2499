use tracing::debug;

use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::services::round::{self, RoundEnd};
use crate::services::setup;
use crate::ui::presenters::MenuPresenter;

/// Presentation switches taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Clear the terminal before each board redraw
    pub clear_screen: bool,
    /// Wait for Enter after feedback messages
    pub pause: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause: true,
        }
    }
}

pub struct Game<I: InputReader, O: OutputWriter> {
    engine: GameEngine,
    options: GameOptions,
    input: I,
    output: O,
    rounds: Vec<RoundEnd>,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(seed: u64, options: GameOptions, input: I, output: O) -> Self {
        Self::with_engine(GameEngine::new(seed), options, input, output)
    }

    pub fn with_engine(engine: GameEngine, options: GameOptions, input: I, output: O) -> Self {
        Game {
            engine,
            options,
            input,
            output,
            rounds: Vec::new(),
        }
    }

    /// Outcomes of the rounds played so far
    pub fn rounds(&self) -> &[RoundEnd] {
        &self.rounds
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Plays rounds until the player declines a replay
    pub fn run(&mut self) -> GameResult<()> {
        loop {
            let end = self.play_one()?;
            self.rounds.push(end);

            if !self.ask_replay()? {
                MenuPresenter::show_farewell(&mut self.output);
                break;
            }
        }
        Ok(())
    }

    fn play_one(&mut self) -> GameResult<RoundEnd> {
        if self.options.clear_screen {
            self.output.clear_screen()?;
        }
        MenuPresenter::show_banner(&mut self.output);

        let category = {
            let categories = self.engine.categories();
            let index = setup::select_category(&categories, &mut self.input, &mut self.output)?;
            categories[index].to_string()
        };
        let difficulty = setup::select_difficulty(&mut self.input, &mut self.output)?;

        let mut session = self.engine.start_round(&category, difficulty)?;
        MenuPresenter::show_round_intro(&category, &session, &mut self.output);
        if self.options.pause {
            self.input.read_line("\nPress Enter to start...")?;
        }

        round::play_round(&mut session, &self.options, &mut self.input, &mut self.output)
    }

    fn ask_replay(&mut self) -> GameResult<bool> {
        loop {
            let answer = self.input.read_line("\nDo you want to play again? (yes/no):")?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" => {
                    debug!(rounds = self.rounds.len(), "replay accepted");
                    return Ok(true);
                }
                "no" | "n" => return Ok(false),
                _ => self.output.writeln("Please enter 'yes' or 'no'"),
            }
        }
    }
}
