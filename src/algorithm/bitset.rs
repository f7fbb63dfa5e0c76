use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity bitset of pattern indices used as a legal-neighbor set
///
/// Pattern indices are zero-based and dense, so index `i` maps directly to
/// bit `i`. Provides O(1) membership testing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    bits: BitVec,
}

impl PatternSet {
    /// Create a set with room for `capacity` patterns and none present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set containing every pattern index below `capacity`
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Build a set from pattern indices, ignoring any at or above `capacity`
    pub fn from_indices<I>(indices: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(capacity);
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Insert a pattern index
    ///
    /// Returns `false` if the index does not fit the set's capacity
    pub fn insert(&mut self, index: usize) -> bool {
        if index < self.bits.len() {
            self.bits.set(index, true);
            true
        } else {
            false
        }
    }

    /// Test pattern membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no patterns are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count patterns in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of pattern indices the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Iterate the contained pattern indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all pattern indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternSet({} patterns: {:?})", self.count(), self.to_vec())
    }
}
