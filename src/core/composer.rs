/// Name composers: combine bank words into faction, settlement, person and
/// animal names using fixed probability bands.
///
/// Every band is half-open on a uniform roll in `[0, 1)`.

use crate::core::bank::NameBank;
use crate::core::dice::Dice;
use crate::core::oracle::UniquenessOracle;
use crate::schema::name::{capitalize_first, GeneratedName, NameTriple};
use crate::schema::slot::{Gender, NameSlot};

/// Outer attempts when searching for an acceptable settlement name.
pub const PLACE_ATTEMPTS: usize = 100;
/// Predicate checks per settlement candidate.
pub const PLACE_CHECKS_PER_ATTEMPT: usize = 5;
/// Nickname draws before a possibly used nickname is accepted.
pub const NICK_ATTEMPTS: usize = 50;

/// The layout of a faction name around its unit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFormat {
    /// `The {unit} of the {sub}`
    TheUnitOfThe,
    /// `{unit} of the {sub}`
    UnitOfThe,
    /// `The {sub} {unit}`
    TheSubUnit,
    /// `{sub} {unit}`
    SubUnit,
}

impl GroupFormat {
    pub fn from_roll(roll: f32) -> GroupFormat {
        if roll < 0.25 {
            Self::TheUnitOfThe
        } else if roll < 0.5 {
            Self::UnitOfThe
        } else if roll < 0.75 {
            Self::TheSubUnit
        } else {
            Self::SubUnit
        }
    }

    pub fn apply(self, unit: &str, sub: &str) -> String {
        match self {
            Self::TheUnitOfThe => format!("The {} of the {}", unit, sub),
            Self::UnitOfThe => format!("{} of the {}", unit, sub),
            Self::TheSubUnit => format!("The {} {}", sub, unit),
            Self::SubUnit => format!("{} {}", sub, unit),
        }
    }
}

/// A descriptor: colors a quarter of the time, adjectives otherwise.
fn descriptor<D, O>(bank: &NameBank, dice: &mut D, oracle: &O) -> String
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let gender = if dice.roll() < 0.25 {
        Gender::Female
    } else {
        Gender::Male
    };
    bank.random_word(NameSlot::Desc, gender, dice, oracle)
}

/// An object word split across weapons, animals and terrains.
fn object<D, O>(bank: &NameBank, dice: &mut D, oracle: &O) -> String
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let roll = dice.roll();
    let gender = if roll < 0.33 {
        Gender::Male
    } else if roll < 0.67 {
        Gender::Female
    } else {
        Gender::None
    };
    bank.random_word(NameSlot::Object, gender, dice, oracle)
}

/// A descriptor-object compound nickname, or the bare object word one time
/// in ten.
pub fn compound_nickname<D, O>(bank: &NameBank, dice: &mut D, oracle: &O) -> String
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let desc = descriptor(bank, dice, oracle);
    let obj = object(bank, dice, oracle);
    if dice.roll() < 0.1 {
        obj
    } else {
        format!("{} {}", desc, obj)
    }
}

/// Faction name such as `The Clan of the Red Wolf`.
pub fn group_name<D, O>(bank: &NameBank, dice: &mut D, oracle: &O) -> String
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let format = GroupFormat::from_roll(dice.roll());
    let unit = bank.random_word(NameSlot::Desc, Gender::None, dice, oracle);
    let desc = descriptor(bank, dice, oracle);
    let obj = object(bank, dice, oracle);
    format.apply(&unit, &format!("{} {}", desc, obj))
}

/// Settlement name: a bare name stem half the time, otherwise a
/// descriptor-terrain compound.
///
/// When `accept` is given, candidates it rejects are retried with numeric
/// suffixes (`" 2"`, `" 3"`, ...). If nothing is accepted the bare name is
/// returned.
pub fn place_name<D, O>(
    bank: &NameBank,
    dice: &mut D,
    oracle: &O,
    accept: Option<&mut dyn FnMut(&str) -> bool>,
) -> String
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let roll = dice.roll();
    let name = if roll < 0.25 {
        bank.random_word(NameSlot::Tribal, Gender::Female, dice, oracle)
    } else if roll < 0.5 {
        bank.random_word(NameSlot::Tribal, Gender::Male, dice, oracle)
    } else {
        let desc = descriptor(bank, dice, oracle);
        let terrain = bank.random_word(NameSlot::Object, Gender::None, dice, oracle);
        format!("{} {}", desc, terrain)
    };

    let Some(accept) = accept else {
        return name;
    };
    disambiguate(&name, accept)
}

/// First suffixed variant of `name` that `accept` takes, or `name` itself.
pub fn disambiguate(name: &str, accept: &mut dyn FnMut(&str) -> bool) -> String {
    for attempt in 0..PLACE_ATTEMPTS {
        let candidate = if attempt == 0 {
            name.to_string()
        } else {
            format!("{} {}", name, attempt + 1)
        };
        for _ in 0..PLACE_CHECKS_PER_ATTEMPT {
            if accept(&candidate) {
                return candidate;
            }
        }
    }
    name.to_string()
}

/// Full personal name `First 'Nick' Last`.
///
/// The nickname is one of the two given names two times in three, else a
/// compound. Nicknames already issued are redrawn up to
/// [`NICK_ATTEMPTS`] times.
pub fn person_name<D, O>(bank: &NameBank, gender: Gender, dice: &mut D, oracle: &O) -> NameTriple
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let last = bank.random_word(NameSlot::Tribal, gender, dice, oracle);
    let first = bank.random_word(NameSlot::Tribal, gender, dice, oracle);

    // Nicks are checked in the capitalized form they are issued in
    let mut nick = String::new();
    for _ in 0..NICK_ATTEMPTS {
        let candidate = if dice.roll() >= 0.33 {
            if dice.roll() >= 0.67 {
                last.clone()
            } else {
                first.clone()
            }
        } else {
            compound_nickname(bank, dice, oracle)
        };
        nick = capitalize_first(&candidate);
        if !oracle.is_nick_used(&nick) {
            break;
        }
    }

    let mut triple = NameTriple::new(&first, &nick, &last);
    triple.resolve_missing_pieces();
    triple
}

/// Animal name: a name stem, replaced by a compound nickname a third of
/// the time.
pub fn animal_name<D, O>(bank: &NameBank, gender: Gender, dice: &mut D, oracle: &O) -> GeneratedName
where
    D: Dice + ?Sized,
    O: UniquenessOracle + ?Sized,
{
    let mut name = bank.random_word(NameSlot::Tribal, gender, dice, oracle);
    if dice.roll() < 0.33 {
        name = compound_nickname(bank, dice, oracle);
    }
    GeneratedName::Single(name)
}
