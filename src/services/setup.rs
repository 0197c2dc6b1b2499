use crate::io::{InputReader, OutputWriter};
use crate::models::difficulty::Difficulty;
use crate::models::errors::GameResult;
use crate::ui::presenters::MenuPresenter;

/// Category menu. Re-prompts until a listed number is entered and
/// returns the chosen index into `categories`.
pub fn select_category(
    categories: &[&str],
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<usize> {
    MenuPresenter::show_categories(categories, output);

    loop {
        let line = input.read_line("\nSelect category (enter number):")?;
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=categories.len()).contains(&choice) => return Ok(choice - 1),
            Ok(_) => output.writeln(&format!(
                "Please enter a number between 1 and {}",
                categories.len()
            )),
            Err(_) => output.writeln("Invalid input! Please enter a number."),
        }
    }
}

/// Difficulty menu. Accepts a menu number or a level name.
pub fn select_difficulty(
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<Difficulty> {
    MenuPresenter::show_difficulties(output);

    loop {
        let line = input.read_line("\nSelect difficulty (enter number):")?;
        match line.parse::<Difficulty>() {
            Ok(level) => return Ok(level),
            Err(_) => output.writeln("Please enter 1, 2, or 3"),
        }
    }
}
