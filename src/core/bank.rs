/// Name bank: word lists for one naming category, with loading,
/// validation and collision-avoiding random retrieval.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

use crate::core::dice::Dice;
use crate::core::oracle::UniquenessOracle;
use crate::core::source::LineSource;
use crate::core::word_list::WordListStore;
use crate::schema::category::NameCategory;
use crate::schema::slot::{Gender, NameSlot};

/// Most draws made for one word before a colliding draw is accepted.
pub const MAX_DRAWS: usize = 50;

/// Returned in place of a word when the requested list is empty.
pub const ERROR_NAME: &str = "Errorname";

#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list not found: {0}")]
    MissingResource(String),
}

/// A data-quality finding in a loaded word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The word occurs more than once in its cell.
    Duplicated {
        gender: Gender,
        slot: NameSlot,
        word: String,
    },
    /// The word has leading or trailing whitespace.
    TrimmableWhitespace {
        gender: Gender,
        slot: NameSlot,
        word: String,
    },
}

impl ValidationIssue {
    pub fn word(&self) -> &str {
        match self {
            Self::Duplicated { word, .. } | Self::TrimmableWhitespace { word, .. } => word,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicated { gender, slot, word } => {
                write!(f, "Duplicated name: {} (gender={} slot={})", word, gender, slot)
            }
            Self::TrimmableWhitespace { gender, slot, word } => write!(
                f,
                "Trimmable whitespace on name: [{}] (gender={} slot={})",
                word, gender, slot
            ),
        }
    }
}

/// Word lists for one naming category. Loaded once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct NameBank {
    category: NameCategory,
    words: WordListStore,
}

impl NameBank {
    pub fn new(category: NameCategory) -> Self {
        Self {
            category,
            words: WordListStore::new(),
        }
    }

    pub fn category(&self) -> NameCategory {
        self.category
    }

    pub fn words(&self) -> &WordListStore {
        &self.words
    }

    /// The full list for a cell.
    pub fn names_for(&self, slot: NameSlot, gender: Gender) -> &[String] {
        self.words.get(gender, slot)
    }

    pub fn add_word(&mut self, slot: NameSlot, gender: Gender, word: impl Into<String>) {
        self.words.add(gender, slot, word);
    }

    /// Add every line as a word in the cell. Returns how many were added.
    pub fn load_from_source<I, S>(&mut self, slot: NameSlot, gender: Gender, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for line in lines {
            self.words.add(gender, slot, line);
            added += 1;
        }
        added
    }

    /// Load a named resource from `source` into the cell.
    pub fn load_file(
        &mut self,
        slot: NameSlot,
        gender: Gender,
        source: &dyn LineSource,
        resource: &str,
    ) -> Result<usize, BankError> {
        let lines = source.lines(resource)?;
        let added = self.load_from_source(slot, gender, lines);
        debug!(
            category = ?self.category,
            %slot,
            %gender,
            resource,
            added,
            "loaded word list"
        );
        Ok(added)
    }

    /// Report duplicated words and words with trimmable whitespace in every
    /// cell. Each finding is logged; the data itself is left untouched.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (gender, slot, words) in self.words.all_cells() {
            // Count occurrences, remembering first-seen order
            let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
            let mut order: Vec<&str> = Vec::new();
            for word in words {
                let count = counts.entry(word.as_str()).or_insert(0);
                if *count == 0 {
                    order.push(word);
                }
                *count += 1;
            }
            for word in order {
                if counts[word] > 1 {
                    issues.push(ValidationIssue::Duplicated {
                        gender,
                        slot,
                        word: word.to_string(),
                    });
                }
            }

            for word in words {
                if word.trim() != word {
                    issues.push(ValidationIssue::TrimmableWhitespace {
                        gender,
                        slot,
                        word: word.clone(),
                    });
                }
            }
        }

        for issue in &issues {
            error!(category = ?self.category, "{}", issue);
        }
        issues
    }

    /// Draw a random word from a cell, avoiding words the oracle reports as
    /// used.
    ///
    /// Redraws on collision, at most [`MAX_DRAWS`] draws in total; after
    /// that the last draw is returned even though it collides. An empty
    /// cell logs an error and yields [`ERROR_NAME`] without drawing.
    pub fn random_word<D, O>(&self, slot: NameSlot, gender: Gender, dice: &mut D, oracle: &O) -> String
    where
        D: Dice + ?Sized,
        O: UniquenessOracle + ?Sized,
    {
        let words = self.names_for(slot, gender);
        if words.is_empty() {
            error!(
                category = ?self.category,
                "Name list for gender={} slot={} is empty.",
                gender,
                slot
            );
            return ERROR_NAME.to_string();
        }

        let mut word = &words[dice.pick(words.len())];
        let mut draws = 1;
        while oracle.is_word_used(word) {
            if draws == MAX_DRAWS {
                debug!(%slot, %gender, word = word.as_str(), "accepting used word after retries");
                break;
            }
            word = &words[dice.pick(words.len())];
            draws += 1;
        }
        word.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::scripted::ScriptedDice;
    use crate::core::oracle::{IssuedNames, NoOracle};
    use crate::core::source::MemorySource;
    use crate::schema::name::GeneratedName;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Reports every word as used.
    struct AllUsed;

    impl UniquenessOracle for AllUsed {
        fn is_word_used(&self, _word: &str) -> bool {
            true
        }

        fn is_nick_used(&self, _nick: &str) -> bool {
            true
        }
    }

    fn bank_with(slot: NameSlot, gender: Gender, words: &[&str]) -> NameBank {
        let mut bank = NameBank::new(NameCategory::HumanStandard);
        bank.load_from_source(slot, gender, words.iter().copied());
        bank
    }

    #[test]
    fn load_keeps_words_in_order() {
        let mut bank = NameBank::new(NameCategory::HumanStandard);
        let added = bank.load_from_source(NameSlot::Desc, Gender::Female, ["Red", "Ochre", "Ash"]);
        assert_eq!(added, 3);
        assert_eq!(bank.names_for(NameSlot::Desc, Gender::Female), &["Red", "Ochre", "Ash"]);
        assert!(bank.names_for(NameSlot::Desc, Gender::Male).is_empty());
    }

    #[test]
    fn load_file_through_source() {
        let source = MemorySource::new().with_file("weapons.txt", "Spear\nClub\n");
        let mut bank = NameBank::new(NameCategory::HumanStandard);
        let added = bank
            .load_file(NameSlot::Object, Gender::Male, &source, "weapons.txt")
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(bank.names_for(NameSlot::Object, Gender::Male), &["Spear", "Club"]);

        let missing = bank.load_file(NameSlot::Object, Gender::Male, &source, "nope.txt");
        assert!(matches!(missing, Err(BankError::MissingResource(_))));
    }

    #[test]
    fn validate_flags_duplicates_and_whitespace() {
        let bank = bank_with(NameSlot::Tribal, Gender::Male, &["Alpha", "Alpha", "Beta ", "Gamma"]);
        let issues = bank.validate();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::Duplicated {
                    gender: Gender::Male,
                    slot: NameSlot::Tribal,
                    word: "Alpha".to_string(),
                },
                ValidationIssue::TrimmableWhitespace {
                    gender: Gender::Male,
                    slot: NameSlot::Tribal,
                    word: "Beta ".to_string(),
                },
            ]
        );
    }

    #[test]
    fn validate_reports_triplicate_once() {
        let bank = bank_with(NameSlot::Desc, Gender::None, &["Clan", "Clan", "Clan"]);
        assert_eq!(bank.validate().len(), 1);
    }

    #[test]
    fn validate_is_case_sensitive_and_per_cell() {
        let mut bank = bank_with(NameSlot::Desc, Gender::None, &["Clan", "clan"]);
        bank.add_word(NameSlot::Desc, Gender::Male, "Clan");
        assert!(bank.validate().is_empty());
    }

    #[test]
    fn validate_is_repeatable() {
        let bank = bank_with(NameSlot::Object, Gender::None, &[" Hills", "Hills", "Hills"]);
        let first = bank.validate();
        let second = bank.validate();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(bank.names_for(NameSlot::Object, Gender::None), &[" Hills", "Hills", "Hills"]);
    }

    #[test]
    fn empty_cell_returns_sentinel_without_drawing() {
        let bank = NameBank::new(NameCategory::HumanStandard);
        let mut dice = ScriptedDice::new(&[]);
        let word = bank.random_word(NameSlot::Tribal, Gender::Female, &mut dice, &NoOracle);
        assert_eq!(word, ERROR_NAME);
        assert_eq!(dice.pick_count, 0);
        assert_eq!(dice.roll_count, 0);
    }

    #[test]
    fn random_word_is_a_member() {
        let words = ["Kaya", "Aiyana", "Nita", "Sora"];
        let bank = bank_with(NameSlot::Tribal, Gender::Female, &words);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let word = bank.random_word(NameSlot::Tribal, Gender::Female, &mut rng, &NoOracle);
            assert!(words.contains(&word.as_str()));
        }
    }

    #[test]
    fn collisions_stop_at_draw_limit() {
        let bank = bank_with(NameSlot::Tribal, Gender::Male, &["Tahu", "Koa"]);
        let mut dice = ScriptedDice::new(&[]).with_picks(&[1]);
        let word = bank.random_word(NameSlot::Tribal, Gender::Male, &mut dice, &AllUsed);
        assert_eq!(dice.pick_count, MAX_DRAWS);
        assert!(word == "Tahu" || word == "Koa");
    }

    #[test]
    fn used_words_are_redrawn() {
        let bank = bank_with(NameSlot::Tribal, Gender::Male, &["Tahu", "Koa", "Ahote"]);
        let mut issued = IssuedNames::new();
        issued.record(&GeneratedName::Single("Tahu".to_string()));
        issued.record(&GeneratedName::Single("Koa".to_string()));

        let mut dice = ScriptedDice::new(&[]).with_picks(&[0, 1, 0, 2]);
        let word = bank.random_word(NameSlot::Tribal, Gender::Male, &mut dice, &issued);
        assert_eq!(word, "Ahote");
        assert_eq!(dice.pick_count, 4);
    }

    #[test]
    fn unused_first_draw_is_taken() {
        let bank = bank_with(NameSlot::Tribal, Gender::Male, &["Tahu", "Koa"]);
        let mut dice = ScriptedDice::new(&[]).with_picks(&[1]);
        let word = bank.random_word(NameSlot::Tribal, Gender::Male, &mut dice, &NoOracle);
        assert_eq!(word, "Koa");
        assert_eq!(dice.pick_count, 1);
    }
}
