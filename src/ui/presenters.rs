use crate::io::OutputWriter;
use crate::models::constants::{BANNER_WIDTH, GALLOWS_STAGES};
use crate::models::difficulty::Difficulty;
use crate::models::errors::GuessRejection;
use crate::models::session::{GameSession, GuessOutcome};

/// Gallows drawing for a number of wrong guesses; counts past the last
/// stage keep showing the full figure.
pub fn gallows_frame(wrong_count: usize) -> &'static str {
    GALLOWS_STAGES[wrong_count.min(GALLOWS_STAGES.len() - 1)]
}

fn join_letters(letters: impl IntoIterator<Item = char>) -> String {
    let joined = letters
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

pub struct MenuPresenter;

impl MenuPresenter {
    pub fn show_banner(output: &mut dyn OutputWriter) {
        let rule = "=".repeat(BANNER_WIDTH);
        output.writeln(&rule);
        output.writeln(&format!("{:^width$}", "WELCOME TO HANGMAN GAME!", width = BANNER_WIDTH));
        output.writeln(&rule);
        output.writeln("");
    }

    pub fn show_categories(categories: &[&str], output: &mut dyn OutputWriter) {
        output.writeln("Available Categories:");
        for (i, name) in categories.iter().enumerate() {
            output.writeln(&format!("{}. {}", i + 1, name));
        }
    }

    pub fn show_difficulties(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("Difficulty Levels:");
        for level in Difficulty::ALL {
            output.writeln(&format!(
                "{}. {} ({} attempts)",
                level.menu_number(),
                level,
                level.allowance()
            ));
        }
    }

    pub fn show_round_intro(category: &str, session: &GameSession, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("Category: {}", category));
        output.writeln(&format!("Difficulty: {}", session.difficulty()));
        output.writeln(&format!("Word length: {} letters", session.word().len()));
    }

    pub fn show_farewell(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("Thanks for playing! Goodbye!");
    }
}

pub struct SessionPresenter;

impl SessionPresenter {
    /// Gallows, masked word and guess summary
    pub fn show_board(session: &GameSession, output: &mut dyn OutputWriter) {
        output.writeln(gallows_frame(session.wrong_guesses().len()));
        output.writeln("");
        output.writeln(&format!("Word: {}", session.masked_word()));
        output.writeln("");
        output.writeln(&format!("Attempts Remaining: {}", session.attempts_remaining()));
        output.writeln(&format!(
            "Wrong Guesses: {}",
            join_letters(session.wrong_guesses().iter().copied())
        ));
        output.writeln(&format!(
            "Correct Guesses: {}",
            join_letters(session.correct_letters())
        ));
    }

    pub fn show_guess_feedback(letter: char, outcome: GuessOutcome, output: &mut dyn OutputWriter) {
        output.writeln("");
        match outcome {
            GuessOutcome::Correct => {
                output.writeln(&format!("Correct! '{}' is in the word!", letter))
            }
            GuessOutcome::Wrong => {
                output.writeln(&format!("Wrong! '{}' is not in the word!", letter))
            }
        }
    }

    pub fn show_rejection(rejection: GuessRejection, output: &mut dyn OutputWriter) {
        let message = match rejection {
            GuessRejection::NotSingleCharacter => "Please enter only one letter!",
            GuessRejection::NotALetter(_) => "Please enter a valid letter!",
            GuessRejection::AlreadyGuessed(_) => "You already guessed that letter!",
        };
        output.writeln(message);
    }

    pub fn show_hint(hint: &str, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("Hint: {}", hint));
    }

    pub fn show_hint_used(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("You already used your hint!");
    }
}

pub struct OutcomePresenter;

impl OutcomePresenter {
    pub fn show_victory(word: &str, output: &mut dyn OutputWriter) {
        let rule = "=".repeat(BANNER_WIDTH);
        output.writeln("");
        output.writeln(&rule);
        output.writeln("CONGRATULATIONS! YOU WON!");
        output.writeln(&format!("The word was: {}", word.to_uppercase()));
        output.writeln(&rule);
    }

    pub fn show_defeat(word: &str, output: &mut dyn OutputWriter) {
        let rule = "=".repeat(BANNER_WIDTH);
        output.writeln("");
        output.writeln(&rule);
        output.writeln("GAME OVER! YOU LOST!");
        output.writeln(&format!("The word was: {}", word.to_uppercase()));
        output.writeln(&rule);
    }

    pub fn show_quit(word: &str, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("Game ended. The word was: {}", word.to_uppercase()));
    }
}
