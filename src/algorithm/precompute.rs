//! Bulk population and verification of legal-set caches
//!
//! A solver typically fills every pattern's cache for its whole offset
//! neighborhood once, then queries compatibility in O(1) while propagating.

use log::{debug, info};
use rand::Rng;

use crate::algorithm::bitset::PatternSet;
use crate::analysis::patterns::{Pattern, PatternCatalog};
use crate::io::error::{CatalogError, Result, invalid_parameter};
use crate::spatial::offset::Offset;

/// Exhaustively compute the legal neighbors of `pattern` at `offset`
///
/// Uses the exact overlap test for every pattern of the catalog, ignoring any
/// cached entries.
pub fn compute_legal_set(catalog: &PatternCatalog, pattern: &Pattern, offset: &Offset) -> PatternSet {
    PatternSet::from_indices(
        catalog
            .iter()
            .filter(|candidate| pattern.overlaps_exactly(candidate, offset))
            .map(Pattern::index),
        catalog.len(),
    )
}

/// Populate every pattern's legal set for one offset
///
/// # Errors
///
/// Returns an error if the offset's arity differs from the catalog's or any
/// pattern already has a legal set for this offset. On error no legal set is
/// written.
pub fn precompute_offset(catalog: &mut PatternCatalog, offset: &Offset) -> Result<()> {
    if offset.arity() != catalog.arity() {
        return Err(invalid_parameter(
            "offset",
            offset,
            &format!("expected {} components", catalog.arity()),
        ));
    }

    // Nothing is written unless every pattern can take the offset
    if let Some(defined) = catalog
        .iter()
        .find(|pattern| pattern.legal_sets().contains(offset))
    {
        return Err(CatalogError::LegalSetAlreadyDefined {
            pattern: defined.index(),
            offset: offset.components().to_vec(),
        });
    }

    let sets: Vec<PatternSet> = catalog
        .iter()
        .map(|pattern| compute_legal_set(catalog, pattern, offset))
        .collect();

    let mut total = 0;
    for (index, set) in sets.into_iter().enumerate() {
        total += set.count();
        catalog.set_legal_patterns(index, offset.clone(), set)?;
    }

    debug!(
        "Offset {offset}: {total} legal pairs across {} patterns",
        catalog.len()
    );
    Ok(())
}

/// Populate legal sets for every offset of a neighborhood
///
/// # Errors
///
/// Propagates the first error from [`precompute_offset`]
pub fn precompute_legal_sets(catalog: &mut PatternCatalog, offsets: &[Offset]) -> Result<()> {
    for offset in offsets {
        precompute_offset(catalog, offset)?;
    }
    info!(
        "Precomputed legal sets for {} offsets over {} patterns",
        offsets.len(),
        catalog.len()
    );
    Ok(())
}

/// Spot-check cached legal sets against the exact overlap test
///
/// Draws `samples` random (pattern, cached offset, candidate) triples and
/// compares both answers. Returns the number of checks performed, which is
/// zero when nothing is cached.
///
/// # Errors
///
/// Returns [`CatalogError::CacheInconsistency`] on the first disagreement
pub fn verify_legal_sets<R: Rng + ?Sized>(
    catalog: &PatternCatalog,
    samples: usize,
    rng: &mut R,
) -> Result<usize> {
    // Sorted so a seeded generator always checks the same triples
    let mut entries: Vec<(&Pattern, &Offset)> = catalog
        .iter()
        .flat_map(|pattern| {
            pattern
                .legal_sets()
                .offsets()
                .map(move |offset| (pattern, offset))
        })
        .collect();
    entries.sort_by(|a, b| (a.0.index(), a.1).cmp(&(b.0.index(), b.1)));

    if entries.is_empty() || catalog.is_empty() {
        return Ok(0);
    }

    let mut checked = 0;
    for _ in 0..samples {
        let Some(&(pattern, offset)) = entries.get(rng.random_range(0..entries.len())) else {
            continue;
        };
        let candidate = catalog.from_index(rng.random_range(0..catalog.len()))?;

        let cached = pattern.is_compatible(candidate, offset);
        if cached != pattern.overlaps_exactly(candidate, offset) {
            return Err(CatalogError::CacheInconsistency {
                pattern: pattern.index(),
                candidate: candidate.index(),
                offset: offset.components().to_vec(),
                cached,
            });
        }
        checked += 1;
    }

    debug!("Verified {checked} cached compatibility answers");
    Ok(checked)
}
