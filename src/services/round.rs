//! A single round of play
//!
//! Draws the board, reads one command per turn and feeds it to the
//! session until the word is solved, the allowance runs out or the
//! player quits.

use tracing::info;

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::models::session::{parse_letter, GameSession, HintResult, RoundStatus};
use crate::services::game::GameOptions;
use crate::ui::presenters::{MenuPresenter, OutcomePresenter, SessionPresenter};

/// What the player typed at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Guess(char),
    Hint,
    Quit,
}

impl PlayerCommand {
    pub fn parse(line: &str) -> GameResult<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "quit" => Ok(PlayerCommand::Quit),
            "hint" => Ok(PlayerCommand::Hint),
            other => parse_letter(other).map(PlayerCommand::Guess),
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Won,
    Lost,
    Quit,
}

pub fn play_round(
    session: &mut GameSession,
    options: &GameOptions,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<RoundEnd> {
    let end = loop {
        draw_board(session, options, output)?;

        match session.status() {
            RoundStatus::Won => {
                OutcomePresenter::show_victory(session.word(), output);
                break RoundEnd::Won;
            }
            RoundStatus::Lost => {
                OutcomePresenter::show_defeat(session.word(), output);
                break RoundEnd::Lost;
            }
            RoundStatus::InProgress => {}
        }

        match read_command(session, input, output)? {
            PlayerCommand::Quit => {
                OutcomePresenter::show_quit(session.word(), output);
                break RoundEnd::Quit;
            }
            PlayerCommand::Hint => {
                match session.request_hint() {
                    HintResult::Granted(hint) => SessionPresenter::show_hint(hint, output),
                    HintResult::AlreadyUsed => SessionPresenter::show_hint_used(output),
                }
                pause(options, input)?;
            }
            PlayerCommand::Guess(letter) => {
                let outcome = session.apply_guess(letter)?;
                SessionPresenter::show_guess_feedback(letter, outcome, output);
                pause(options, input)?;
            }
        }
    };

    info!(
        ?end,
        word = session.word(),
        wrong_guesses = session.wrong_guesses().len(),
        hint_used = session.hint_used(),
        "round finished"
    );
    Ok(end)
}

fn draw_board(
    session: &GameSession,
    options: &GameOptions,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    if options.clear_screen {
        output.clear_screen()?;
        MenuPresenter::show_banner(output);
    }
    SessionPresenter::show_board(session, output);
    Ok(())
}

/// Prompts until the player enters a command the session will accept
fn read_command(
    session: &GameSession,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<PlayerCommand> {
    loop {
        let line = input.read_line("\nEnter a letter (or 'hint' for a hint, 'quit' to exit):")?;
        let checked = PlayerCommand::parse(&line).and_then(|command| match command {
            PlayerCommand::Guess(letter) => session.check_letter(letter).map(PlayerCommand::Guess),
            other => Ok(other),
        });

        match checked {
            Ok(command) => return Ok(command),
            Err(GameError::InvalidGuess(rejection)) => {
                SessionPresenter::show_rejection(rejection, output)
            }
            Err(e) => return Err(e),
        }
    }
}

pub(crate) fn pause(options: &GameOptions, input: &mut dyn InputReader) -> GameResult<()> {
    if options.pause {
        input.read_line("Press Enter to continue...")?;
    }
    Ok(())
}
