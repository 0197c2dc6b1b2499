//! Game session
//!
//! State for a single round: the secret word, the letters guessed so far
//! and the remaining wrong-guess allowance. All mutation happens through
//! [`GameSession::apply_guess`] and [`GameSession::request_hint`]; a failed
//! guess leaves the session untouched.

use std::collections::BTreeSet;

use tracing::debug;

use super::difficulty::Difficulty;
use super::errors::{GameError, GameResult, GuessRejection};

/// Result of a valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResult<'a> {
    Granted(&'a str),
    AlreadyUsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    word: String,
    hint: String,
    difficulty: Difficulty,
    guessed_letters: BTreeSet<char>,
    wrong_guesses: BTreeSet<char>,
    attempts_remaining: u32,
    hint_used: bool,
}

impl GameSession {
    /// Starts a round with a full allowance and nothing guessed.
    /// The word is stored lowercased.
    pub fn start(word: &str, hint: &str, difficulty: Difficulty) -> Self {
        Self {
            word: word.to_lowercase(),
            hint: hint.to_string(),
            difficulty,
            guessed_letters: BTreeSet::new(),
            wrong_guesses: BTreeSet::new(),
            attempts_remaining: difficulty.allowance(),
            hint_used: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn allowance(&self) -> u32 {
        self.difficulty.allowance()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn wrong_guesses(&self) -> &BTreeSet<char> {
        &self.wrong_guesses
    }

    /// Guessed letters that occur in the word, sorted
    pub fn correct_letters(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|c| self.word.contains(*c))
            .collect()
    }

    /// Validates a letter without recording it
    pub fn check_letter(&self, letter: char) -> GameResult<char> {
        if !letter.is_ascii_alphabetic() {
            return Err(GuessRejection::NotALetter(letter).into());
        }
        let letter = letter.to_ascii_lowercase();
        if self.guessed_letters.contains(&letter) {
            return Err(GuessRejection::AlreadyGuessed(letter).into());
        }
        Ok(letter)
    }

    /// Applies a guess and reports whether the letter is in the word.
    ///
    /// # Errors
    ///
    /// * `InvalidGuess` if the letter is not alphabetic or was guessed before
    /// * `RoundFinished` if the round is already won or lost
    pub fn apply_guess(&mut self, letter: char) -> GameResult<GuessOutcome> {
        if self.status().is_over() {
            return Err(GameError::RoundFinished);
        }
        let letter = self.check_letter(letter)?;

        self.guessed_letters.insert(letter);
        let outcome = if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.wrong_guesses.insert(letter);
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessOutcome::Wrong
        };

        debug!(
            %letter,
            ?outcome,
            attempts_remaining = self.attempts_remaining,
            "guess applied"
        );
        Ok(outcome)
    }

    /// Reveals the hint once; later calls change nothing
    pub fn request_hint(&mut self) -> HintResult<'_> {
        if self.hint_used {
            debug!("hint already used");
            return HintResult::AlreadyUsed;
        }
        self.hint_used = true;
        debug!("hint granted");
        HintResult::Granted(&self.hint)
    }

    pub fn status(&self) -> RoundStatus {
        if self.word.chars().all(|c| self.guessed_letters.contains(&c)) {
            RoundStatus::Won
        } else if self.attempts_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// One entry per character of the word, flagged when that letter has been guessed
    pub fn reveal_pattern(&self) -> Vec<(char, bool)> {
        self.word
            .chars()
            .map(|c| (c, self.guessed_letters.contains(&c)))
            .collect()
    }

    /// The word with unguessed letters replaced by `_`, space separated
    pub fn masked_word(&self) -> String {
        self.reveal_pattern()
            .into_iter()
            .map(|(c, revealed)| if revealed { c.to_string() } else { "_".to_string() })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalizes raw player text into a single lowercase letter
pub fn parse_letter(input: &str) -> GameResult<char> {
    let mut chars = input.trim().chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(GuessRejection::NotSingleCharacter.into()),
    };
    if !letter.is_ascii_alphabetic() {
        return Err(GuessRejection::NotALetter(letter).into());
    }
    Ok(letter.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str, difficulty: Difficulty) -> GameSession {
        GameSession::start(word, "a hint", difficulty)
    }

    #[test]
    fn start_gives_full_allowance() {
        let s = session("cat", Difficulty::Medium);
        assert_eq!(s.attempts_remaining(), 7);
        assert!(s.guessed_letters().is_empty());
        assert!(s.wrong_guesses().is_empty());
        assert!(!s.hint_used());
        assert_eq!(s.status(), RoundStatus::InProgress);
    }

    #[test]
    fn correct_guess_keeps_attempts() {
        let mut s = session("cat", Difficulty::Easy);
        assert_eq!(s.apply_guess('a').unwrap(), GuessOutcome::Correct);
        assert_eq!(s.attempts_remaining(), 10);
        assert!(s.wrong_guesses().is_empty());
    }

    #[test]
    fn wrong_guess_costs_an_attempt() {
        let mut s = session("cat", Difficulty::Easy);
        assert_eq!(s.apply_guess('z').unwrap(), GuessOutcome::Wrong);
        assert_eq!(s.attempts_remaining(), 9);
        assert!(s.wrong_guesses().contains(&'z'));
        assert!(s.guessed_letters().contains(&'z'));
    }

    #[test]
    fn uppercase_guess_is_normalized() {
        let mut s = session("cat", Difficulty::Easy);
        assert_eq!(s.apply_guess('C').unwrap(), GuessOutcome::Correct);
        assert!(s.guessed_letters().contains(&'c'));
    }

    #[test]
    fn repeated_guess_is_rejected_without_change() {
        let mut s = session("cat", Difficulty::Easy);
        s.apply_guess('x').unwrap();
        let before = s.clone();

        let result = s.apply_guess('x');
        assert!(matches!(
            result,
            Err(GameError::InvalidGuess(GuessRejection::AlreadyGuessed('x')))
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn non_letter_is_rejected_without_change() {
        let mut s = session("cat", Difficulty::Easy);
        let before = s.clone();
        assert!(matches!(
            s.apply_guess('3'),
            Err(GameError::InvalidGuess(GuessRejection::NotALetter('3')))
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn guessing_every_letter_wins() {
        let mut s = session("cat", Difficulty::Hard);
        for letter in ['c', 'a', 't'] {
            s.apply_guess(letter).unwrap();
        }
        assert_eq!(s.status(), RoundStatus::Won);
    }

    #[test]
    fn five_wrong_guesses_on_hard_loses() {
        let mut s = session("cat", Difficulty::Hard);
        for letter in ['b', 'd', 'e', 'f', 'g'] {
            assert_eq!(s.apply_guess(letter).unwrap(), GuessOutcome::Wrong);
        }
        assert_eq!(s.attempts_remaining(), 0);
        assert_eq!(s.status(), RoundStatus::Lost);
    }

    #[test]
    fn no_guesses_after_round_ends() {
        let mut s = session("a", Difficulty::Hard);
        s.apply_guess('a').unwrap();
        let before = s.clone();
        assert!(matches!(s.apply_guess('b'), Err(GameError::RoundFinished)));
        assert_eq!(s, before);
    }

    #[test]
    fn hint_is_granted_once() {
        let mut s = GameSession::start("cat", "Purrs", Difficulty::Easy);
        assert_eq!(s.request_hint(), HintResult::Granted("Purrs"));
        assert_eq!(s.request_hint(), HintResult::AlreadyUsed);
        assert!(s.hint_used());
        assert_eq!(s.attempts_remaining(), 10);
    }

    #[test]
    fn pattern_reveals_letters_not_positions() {
        let mut s = session("egg", Difficulty::Easy);
        s.apply_guess('g').unwrap();
        assert_eq!(
            s.reveal_pattern(),
            vec![('e', false), ('g', true), ('g', true)]
        );
        assert_eq!(s.masked_word(), "_ g g");
    }

    #[test]
    fn repeated_letter_counts_once() {
        let mut s = session("elephant", Difficulty::Medium);
        assert_eq!(s.apply_guess('e').unwrap(), GuessOutcome::Correct);
        assert_eq!(s.attempts_remaining(), 7);
        let revealed: Vec<bool> = s.reveal_pattern().into_iter().map(|(_, r)| r).collect();
        assert_eq!(
            revealed,
            vec![true, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn correct_letters_are_sorted_and_exclude_misses() {
        let mut s = session("tennis", Difficulty::Easy);
        for letter in ['s', 'z', 'e', 't'] {
            s.apply_guess(letter).unwrap();
        }
        assert_eq!(s.correct_letters(), vec!['e', 's', 't']);
    }

    #[test]
    fn parse_letter_accepts_one_letter() {
        assert_eq!(parse_letter(" Q \n").unwrap(), 'q');
        assert_eq!(parse_letter("m").unwrap(), 'm');
    }

    #[test]
    fn parse_letter_rejects_malformed_input() {
        assert!(matches!(
            parse_letter("ab"),
            Err(GameError::InvalidGuess(GuessRejection::NotSingleCharacter))
        ));
        assert!(matches!(
            parse_letter("   "),
            Err(GameError::InvalidGuess(GuessRejection::NotSingleCharacter))
        ));
        assert!(matches!(
            parse_letter("?"),
            Err(GameError::InvalidGuess(GuessRejection::NotALetter('?')))
        ));
    }
}
