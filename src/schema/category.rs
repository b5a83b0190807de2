use serde::{Deserialize, Serialize};

/// Top-level naming context selecting which name bank to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameCategory {
    NoName,
    HumanStandard,
}

impl Default for NameCategory {
    fn default() -> Self {
        Self::HumanStandard
    }
}

/// The naming style a host asks for. Only `Full` names are composed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameStyle {
    Full,
    Numeric,
}

impl Default for NameStyle {
    fn default() -> Self {
        Self::Full
    }
}
