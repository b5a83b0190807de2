use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical gender used purely as a lookup axis for word selection.
///
/// Ordering follows the host's enumeration: `None`, `Male`, `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    None,
    Male,
    Female,
}

impl Default for Gender {
    fn default() -> Self {
        Self::None
    }
}

impl Gender {
    pub const COUNT: usize = 3;
    pub const ALL: [Gender; Self::COUNT] = [Self::None, Self::Male, Self::Female];

    /// Position of this gender in the dense word grid.
    pub fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Parse a case-insensitive label such as `"female"` or `"f"`.
    pub fn parse(s: &str) -> Option<Gender> {
        match s.to_lowercase().as_str() {
            "none" | "neutral" | "n" => Some(Self::None),
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "None",
            Self::Male => "Male",
            Self::Female => "Female",
        };
        f.write_str(label)
    }
}

/// The semantic role a word fills inside a composed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NameSlot {
    /// Personal or place name stem.
    Tribal,
    /// Descriptive word: adjectives, colors, faction unit words.
    Desc,
    /// Object word: animals, terrains, weapons.
    Object,
}

impl NameSlot {
    pub const COUNT: usize = 3;
    pub const ALL: [NameSlot; Self::COUNT] = [Self::Tribal, Self::Desc, Self::Object];

    pub fn index(self) -> usize {
        match self {
            Self::Tribal => 0,
            Self::Desc => 1,
            Self::Object => 2,
        }
    }
}

impl fmt::Display for NameSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Tribal => "Tribal",
            Self::Desc => "Desc",
            Self::Object => "Object",
        };
        f.write_str(label)
    }
}
