use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-part personal name: given name, quoted nickname, family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NameTriple {
    pub first: String,
    pub nick: String,
    pub last: String,
}

impl NameTriple {
    pub fn new(first: &str, nick: &str, last: &str) -> Self {
        Self {
            first: first.to_string(),
            nick: nick.to_string(),
            last: last.to_string(),
        }
    }

    /// Parse the text form `First 'Nick' Last`.
    ///
    /// Without a quoted nickname, a single word becomes the nickname and
    /// longer input splits into a first word and a family name.
    pub fn from_text(input: &str) -> NameTriple {
        let input = input.trim();
        if let (Some(open), Some(close)) = (input.find('\''), input.rfind('\'')) {
            if close > open {
                return NameTriple {
                    first: input[..open].trim().to_string(),
                    nick: input[open + 1..close].trim().to_string(),
                    last: input[close + 1..].trim().to_string(),
                };
            }
        }

        let words: Vec<&str> = input.split_whitespace().collect();
        match words.as_slice() {
            [] => NameTriple::default(),
            [only] => NameTriple::new("", only, ""),
            [first, rest @ ..] => NameTriple::new(first, "", &rest.join(" ")),
        }
    }

    /// Uppercase the first character of the nickname.
    pub fn capitalize_nick(&mut self) {
        self.nick = capitalize_first(&self.nick);
    }

    /// Fill an empty nickname from the family name, or the given name when
    /// there is no family name either.
    pub fn resolve_missing_pieces(&mut self) {
        if self.nick.is_empty() {
            self.nick = if self.last.is_empty() {
                self.first.clone()
            } else {
                self.last.clone()
            };
        }
    }
}

/// `word` with its first character uppercased.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for NameTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if !self.first.is_empty() {
            parts.push(self.first.clone());
        }
        if !self.nick.is_empty() {
            parts.push(format!("'{}'", self.nick));
        }
        if !self.last.is_empty() {
            parts.push(self.last.clone());
        }
        f.write_str(&parts.join(" "))
    }
}

/// A finished name handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratedName {
    /// One-part name, used for animals.
    Single(String),
    /// Given name, nickname and family name, used for people.
    Triple(NameTriple),
}

impl GeneratedName {
    /// The nickname component, if this is a structured name.
    pub fn nick(&self) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Triple(triple) => Some(&triple.nick),
        }
    }
}

impl fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(name) => f.write_str(name),
            Self::Triple(triple) => triple.fmt(f),
        }
    }
}
