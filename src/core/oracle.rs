/// Uniqueness oracle: the host's record of names already issued.

use rustc_hash::FxHashSet;

use crate::schema::name::GeneratedName;

/// Point-in-time, read-only questions about names the host has issued.
///
/// Generation only queries the oracle. Recording an accepted name is the
/// host's job, after it receives the final result.
pub trait UniquenessOracle {
    /// Is this exact word used anywhere as a name component?
    fn is_word_used(&self, word: &str) -> bool;

    /// Is this exact nickname used as the nick of any issued structured name?
    fn is_nick_used(&self, nick: &str) -> bool;
}

/// An oracle that knows of no issued names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOracle;

impl UniquenessOracle for NoOracle {
    fn is_word_used(&self, _word: &str) -> bool {
        false
    }

    fn is_nick_used(&self, _nick: &str) -> bool {
        false
    }
}

/// In-memory registry of issued names, for hosts without their own.
#[derive(Debug, Clone, Default)]
pub struct IssuedNames {
    words: FxHashSet<String>,
    nicks: FxHashSet<String>,
    full: FxHashSet<String>,
    count: usize,
}

impl IssuedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted name. Each whitespace-separated word of every
    /// component becomes a used word; a structured name's nick is kept whole.
    pub fn record(&mut self, name: &GeneratedName) {
        self.full.insert(name.to_string());
        match name {
            GeneratedName::Single(text) => self.record_words(text),
            GeneratedName::Triple(triple) => {
                self.record_words(&triple.first);
                self.record_words(&triple.nick);
                self.record_words(&triple.last);
                if !triple.nick.is_empty() {
                    self.nicks.insert(triple.nick.clone());
                }
            }
        }
        self.count += 1;
    }

    /// Record a free-form name such as a settlement or faction name.
    pub fn record_text(&mut self, text: &str) {
        self.full.insert(text.to_string());
        self.record_words(text);
        self.count += 1;
    }

    fn record_words(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.words.insert(word.to_string());
        }
    }

    /// Whether this exact name, in display form, has been recorded.
    pub fn contains(&self, name: &str) -> bool {
        self.full.contains(name)
    }

    /// Number of names recorded so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.nicks.clear();
        self.full.clear();
        self.count = 0;
    }
}

impl UniquenessOracle for IssuedNames {
    fn is_word_used(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn is_nick_used(&self, nick: &str) -> bool {
        self.nicks.contains(nick)
    }
}
