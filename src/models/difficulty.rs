//! Difficulty levels and their wrong-guess allowances

use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of wrong guesses the player may make before losing
    pub fn allowance(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 1-based position in the difficulty menu
    pub fn menu_number(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts menu numbers (`1`-`3`) or level names, ignoring case.
impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowances_match_levels() {
        assert_eq!(Difficulty::Easy.allowance(), 10);
        assert_eq!(Difficulty::Medium.allowance(), 7);
        assert_eq!(Difficulty::Hard.allowance(), 5);
    }

    #[test]
    fn parses_menu_numbers_and_names() {
        assert_eq!("1".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" 2\n".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    }

    #[test]
    fn rejects_unknown_levels() {
        for text in ["0", "4", "", "extreme", "1.0"] {
            let result = text.parse::<Difficulty>();
            assert!(
                matches!(result, Err(GameError::InvalidDifficulty(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn menu_numbers_follow_declared_order() {
        for (index, level) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(level.menu_number(), index + 1);
        }
    }
}
