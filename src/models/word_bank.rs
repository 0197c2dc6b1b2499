//! Word bank
//!
//! Immutable table of categories, each holding (word, hint) pairs.
//! Words are drawn uniformly at random through a caller-supplied RNG so
//! the engine can seed the draw.

use rand::seq::SliceRandom;
use rand::Rng;

use super::constants::WORD_CATEGORIES;
use super::errors::{GameError, GameResult};

/// A named group of words, each paired with a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    entries: Vec<(String, String)>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

#[derive(Debug, Clone)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The compiled-in categories
    pub fn builtin() -> Self {
        let categories = WORD_CATEGORIES
            .iter()
            .map(|(name, words)| {
                let entries = words
                    .iter()
                    .map(|(word, hint)| (word.to_string(), hint.to_string()))
                    .collect();
                Category::new(*name, entries)
            })
            .collect();
        Self { categories }
    }

    /// Category names in declared order
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }

    /// Looks up a category by name, ignoring ASCII case
    pub fn category(&self, name: &str) -> GameResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| GameError::InvalidCategory(name.to_string()))
    }

    pub fn entries(&self, name: &str) -> GameResult<&[(String, String)]> {
        self.category(name).map(Category::entries)
    }

    /// Picks a (word, hint) pair uniformly from the named category
    pub fn pick_random(&self, name: &str, rng: &mut impl Rng) -> GameResult<(&str, &str)> {
        let category = self.category(name)?;
        category
            .entries
            .choose(rng)
            .map(|(word, hint)| (word.as_str(), hint.as_str()))
            .ok_or_else(|| GameError::InvalidCategory(name.to_string()))
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_categories_keep_declared_order() {
        let bank = WordBank::builtin();
        assert_eq!(
            bank.categories(),
            vec!["Animals", "Countries", "Technology", "Sports"]
        );
    }

    #[test]
    fn every_builtin_word_is_lowercase_with_a_hint() {
        let bank = WordBank::builtin();
        for name in bank.categories() {
            let entries = bank.entries(name).unwrap();
            assert_eq!(entries.len(), 8, "{} should hold eight words", name);
            for (word, hint) in entries {
                assert!(!word.is_empty());
                assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{}", word);
                assert!(!hint.is_empty(), "{} has no hint", word);
            }
        }
    }

    #[test]
    fn pick_random_draws_from_requested_category() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (word, hint) = bank.pick_random("Countries", &mut rng).unwrap();
            let entries = bank.entries("Countries").unwrap();
            assert!(entries.iter().any(|(w, h)| w == word && h == hint));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let bank = WordBank::builtin();
        assert_eq!(bank.category("sports").unwrap().name(), "Sports");
        assert_eq!(bank.category("TECHNOLOGY").unwrap().name(), "Technology");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let result = bank.pick_random("Planets", &mut rng);
        assert!(matches!(result, Err(GameError::InvalidCategory(name)) if name == "Planets"));
    }

    #[test]
    fn single_entry_category_always_yields_that_entry() {
        let bank = WordBank::new(vec![Category::new(
            "Pets",
            vec![("cat".to_string(), "Purrs".to_string())],
        )]);
        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(bank.pick_random("Pets", &mut rng).unwrap(), ("cat", "Purrs"));
    }

    #[test]
    fn same_seed_draws_same_words() {
        let bank = WordBank::builtin();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                bank.pick_random("Animals", &mut a).unwrap(),
                bank.pick_random("Animals", &mut b).unwrap()
            );
        }
    }
}
