use crate::algorithm::bitset::PatternSet;
use crate::spatial::offset::Offset;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Write-once per-offset store of legal neighbor sets for one pattern
///
/// Once an offset has an entry it is authoritative: queries at that offset
/// never fall back to the exact overlap test, and the entry cannot be
/// replaced.
#[derive(Clone, Debug, Default)]
pub struct LegalSetCache {
    sets: HashMap<Offset, PatternSet>,
}

impl LegalSetCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Legal set stored for `offset`, if any
    pub fn get(&self, offset: &Offset) -> Option<&PatternSet> {
        self.sets.get(offset)
    }

    /// Check whether `offset` already has an entry
    pub fn contains(&self, offset: &Offset) -> bool {
        self.sets.contains_key(offset)
    }

    /// Store the legal set for `offset`
    ///
    /// Returns the rejected set back if the offset is already populated.
    ///
    /// # Errors
    ///
    /// Returns `Err(set)` when an entry for `offset` already exists
    pub fn insert(&mut self, offset: Offset, set: PatternSet) -> Result<(), PatternSet> {
        match self.sets.entry(offset) {
            Entry::Occupied(_) => Err(set),
            Entry::Vacant(entry) => {
                entry.insert(set);
                Ok(())
            }
        }
    }

    /// Number of populated offsets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Test if no offset has been populated
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate populated offsets in unspecified order
    pub fn offsets(&self) -> impl Iterator<Item = &Offset> {
        self.sets.keys()
    }
}
