//! Adjacency legality between patterns at a relative offset
//!
//! Two patterns are compatible at an offset when every cell where their
//! windows overlap carries the same symbol. A per-offset legal set attached to
//! the reference pattern, when present, answers instead of the overlap test.

use ndarray::{Dimension, IxDyn};

use crate::algorithm::bitset::PatternSet;
use crate::analysis::patterns::Pattern;
use crate::io::error::{CatalogError, Result, invalid_parameter};
use crate::spatial::offset::Offset;

/// Bounds of the region of a window overlapped by a shifted window
///
/// `start` is inclusive and `end` exclusive, both in the reference window's
/// coordinates. Returns `None` when the windows do not touch.
pub fn overlap_region(shape: &[usize], offset: &Offset) -> Option<(Vec<usize>, Vec<usize>)> {
    let mut start = Vec::with_capacity(shape.len());
    let mut end = Vec::with_capacity(shape.len());

    for (&extent, &shift) in shape.iter().zip(offset.components()) {
        let extent = extent as isize;
        let lo = shift.max(0);
        let hi = extent.saturating_add(shift).min(extent);
        if hi <= lo {
            return None;
        }
        start.push(lo as usize);
        end.push(hi as usize);
    }

    Some((start, end))
}

impl Pattern {
    /// Decide whether `candidate` may sit at `offset` relative to this pattern
    ///
    /// Uses the cached legal set for `offset` when one exists, otherwise the
    /// exact overlap test.
    ///
    /// # Panics
    ///
    /// Panics if the two patterns differ in shape or the offset's arity differs
    /// from the pattern's; both mean the catalog was assembled incorrectly.
    pub fn is_compatible(&self, candidate: &Self, offset: &Offset) -> bool {
        assert_eq!(
            self.shape(),
            candidate.shape(),
            "patterns {} and {} have different shapes",
            self.index(),
            candidate.index()
        );
        assert_eq!(
            offset.arity(),
            self.arity(),
            "offset {offset} does not match pattern arity {}",
            self.arity()
        );

        if let Some(legal) = self.legal_sets.get(offset) {
            return legal.contains(candidate.index());
        }

        self.overlaps_exactly(candidate, offset)
    }

    /// Compare overlapping cells directly, ignoring any cached legal set
    ///
    /// Vacuously true when the windows do not overlap. Stops at the first
    /// mismatching cell.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Pattern::is_compatible`]
    pub fn overlaps_exactly(&self, candidate: &Self, offset: &Offset) -> bool {
        assert_eq!(
            self.shape(),
            candidate.shape(),
            "patterns {} and {} have different shapes",
            self.index(),
            candidate.index()
        );
        assert_eq!(offset.arity(), self.arity(), "offset arity mismatch");

        let Some((start, end)) = overlap_region(self.shape(), offset) else {
            return true;
        };

        let extent: Vec<usize> = start.iter().zip(&end).map(|(lo, hi)| hi - lo).collect();
        let data = self.data();
        let other = candidate.data();
        let mut here = vec![0usize; extent.len()];
        let mut there = vec![0usize; extent.len()];

        for local in ndarray::indices(IxDyn(&extent)) {
            for (axis, &step) in local.slice().iter().enumerate() {
                let lo = start.get(axis).copied().unwrap_or(0);
                let shift = offset.components().get(axis).copied().unwrap_or(0);
                let cell = lo + step;
                if let Some(h) = here.get_mut(axis) {
                    *h = cell;
                }
                if let Some(t) = there.get_mut(axis) {
                    // cell >= max(shift, 0), so the difference is non-negative
                    *t = (cell as isize - shift) as usize;
                }
            }

            if data.get(here.as_slice()) != other.get(there.as_slice()) {
                return false;
            }
        }

        true
    }

    /// Attach the complete legal set for `offset`
    ///
    /// The set becomes authoritative for that offset. Callers must include
    /// every legal candidate; the oracle does not validate the contents.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The offset's arity differs from the pattern's
    /// - A legal set for `offset` is already attached
    pub fn set_legal_patterns(&mut self, offset: Offset, legal_patterns: PatternSet) -> Result<()> {
        if offset.arity() != self.arity() {
            return Err(invalid_parameter(
                "offset",
                &offset,
                &format!("expected {} components", self.arity()),
            ));
        }

        let components = offset.components().to_vec();
        self.legal_sets
            .insert(offset, legal_patterns)
            .map_err(|_rejected| CatalogError::LegalSetAlreadyDefined {
                pattern: self.index(),
                offset: components,
            })
    }
}
