//! Tribal Names: word-bank driven name generation for games.
//!
//! Loads categorized word lists (name stems, descriptors, objects) keyed by
//! gender and slot, and composes them into names for tribal people, animals,
//! settlements and factions, steering clear of names the host already uses.

pub mod core;
pub mod schema;
