/// Dense word grid indexed by gender and name slot.

use crate::schema::slot::{Gender, NameSlot};

/// Candidate words for every (gender, slot) cell.
///
/// Every cell exists from construction on, so lookups never need an
/// existence check; an unloaded cell is simply empty.
#[derive(Debug, Clone, Default)]
pub struct WordListStore {
    cells: [[Vec<String>; NameSlot::COUNT]; Gender::COUNT],
}

impl WordListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word to a cell. Duplicates are kept; validation reports them.
    pub fn add(&mut self, gender: Gender, slot: NameSlot, word: impl Into<String>) {
        self.cells[gender.index()][slot.index()].push(word.into());
    }

    /// All words in a cell, in insertion order.
    pub fn get(&self, gender: Gender, slot: NameSlot) -> &[String] {
        &self.cells[gender.index()][slot.index()]
    }

    /// Every cell of the grid, empty ones included.
    pub fn all_cells(&self) -> impl Iterator<Item = (Gender, NameSlot, &[String])> + '_ {
        Gender::ALL.into_iter().flat_map(move |gender| {
            NameSlot::ALL
                .into_iter()
                .map(move |slot| (gender, slot, self.get(gender, slot)))
        })
    }

    /// Total number of words across all cells.
    pub fn len(&self) -> usize {
        self.all_cells().map(|(_, _, words)| words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_has_every_cell_empty() {
        let store = WordListStore::new();
        assert_eq!(store.all_cells().count(), Gender::COUNT * NameSlot::COUNT);
        assert!(store.all_cells().all(|(_, _, words)| words.is_empty()));
        assert!(store.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = WordListStore::new();
        store.add(Gender::Female, NameSlot::Tribal, "Aiyana");
        store.add(Gender::Female, NameSlot::Tribal, "Kaya");
        store.add(Gender::Female, NameSlot::Tribal, "Aiyana");
        assert_eq!(
            store.get(Gender::Female, NameSlot::Tribal),
            &["Aiyana", "Kaya", "Aiyana"]
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn cells_are_independent() {
        let mut store = WordListStore::new();
        store.add(Gender::Male, NameSlot::Object, "Spear");
        assert_eq!(store.get(Gender::Male, NameSlot::Object), &["Spear"]);
        assert!(store.get(Gender::Female, NameSlot::Object).is_empty());
        assert!(store.get(Gender::Male, NameSlot::Desc).is_empty());
    }

    #[test]
    fn all_cells_walks_gender_major() {
        let store = WordListStore::new();
        let order: Vec<(Gender, NameSlot)> =
            store.all_cells().map(|(g, s, _)| (g, s)).take(4).collect();
        assert_eq!(
            order,
            vec![
                (Gender::None, NameSlot::Tribal),
                (Gender::None, NameSlot::Desc),
                (Gender::None, NameSlot::Object),
                (Gender::Male, NameSlot::Tribal),
            ]
        );
    }
}
