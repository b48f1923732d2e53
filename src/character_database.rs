//! CharacterDatabase: rows in a list, looked up by name through the table.

use crate::character::Character;
use crate::error::TableError;
use crate::probing_hash_table::ProbingHashTable;

const INITIAL_CAPACITY: usize = 10;

/// Characters stored in insertion order, indexed by name.
///
/// Removing a character blanks its row instead of shifting the list, so the
/// row indices held by the name table stay valid.
pub struct CharacterDatabase {
    rows: Vec<Option<Character>>,
    index: ProbingHashTable<String, usize>,
}

impl CharacterDatabase {
    pub fn new() -> Result<Self, TableError> {
        Ok(Self {
            rows: Vec::new(),
            index: ProbingHashTable::with_capacity(INITIAL_CAPACITY)?,
        })
    }

    /// Appends a character and returns its row. Names must be unique.
    pub fn add_character(
        &mut self,
        name: &str,
        height: u32,
        weight: u32,
        moral_align: f64,
    ) -> Result<usize, TableError> {
        if self.index.contains_key(name) {
            return Err(TableError::InvalidArgument("character already exists"));
        }
        let row = self.rows.len();
        self.index.insert(name.to_string(), row)?;
        self.rows
            .push(Some(Character::new(name, height, weight, moral_align)));
        Ok(row)
    }

    pub fn remove_character(&mut self, name: &str) -> Option<Character> {
        let row = self.index.remove(name)?;
        self.rows.get_mut(row)?.take()
    }

    pub fn get_character(&self, name: &str) -> Option<&Character> {
        let &row = self.index.get(name)?;
        self.rows.get(row)?.as_ref()
    }

    pub fn get_character_mut(&mut self, name: &str) -> Option<&mut Character> {
        let &row = self.index.get(name)?;
        self.rows.get_mut(row)?.as_mut()
    }

    /// The name → row table, for inspection.
    pub fn index(&self) -> &ProbingHashTable<String, usize> {
        &self.index
    }

    /// Live characters in row order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.rows.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
