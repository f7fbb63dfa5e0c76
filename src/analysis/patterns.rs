//! Pattern extraction, deduplication and the pattern registry
//!
//! Slides a window across an indexed sample, expands each window with its
//! symmetry variants and keeps one pattern per distinct content. Patterns are
//! numbered densely in discovery order: row-major window order, with each
//! window's variants considered immediately after it.

use log::{info, trace};
use ndarray::{ArrayD, ArrayViewD, Dimension, IxDyn, Slice};
use std::collections::HashMap;
use std::hash::Hash;

use crate::algorithm::bitset::PatternSet;
use crate::algorithm::cache::LegalSetCache;
use crate::analysis::symbols::SymbolTable;
use crate::io::configuration::CatalogConfig;
use crate::io::error::{CatalogError, Result, invalid_parameter};
use crate::spatial::offset::Offset;
use crate::spatial::symmetry::symmetry_for;

/// A deduplicated window of symbol indices with a stable identity
///
/// The symbol data never changes after extraction. The only mutable part is
/// the write-once legal-set cache consulted by the compatibility oracle.
#[derive(Clone, Debug)]
pub struct Pattern {
    index: usize,
    data: ArrayD<usize>,
    pub(crate) legal_sets: LegalSetCache,
}

impl Pattern {
    /// Create a pattern with an empty legal-set cache
    pub fn new(index: usize, data: ArrayD<usize>) -> Self {
        Self {
            index,
            data,
            legal_sets: LegalSetCache::new(),
        }
    }

    /// Dense identity assigned at extraction
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Symbol index grid
    pub fn data(&self) -> ArrayViewD<'_, usize> {
        self.data.view()
    }

    /// Extent along each axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of spatial axes
    pub fn arity(&self) -> usize {
        self.data.ndim()
    }

    /// Symbol index at a coordinate given in storage axis order
    pub fn get(&self, coordinate: &[usize]) -> Option<usize> {
        self.data.get(coordinate).copied()
    }

    /// Precomputed legal sets attached to this pattern
    pub const fn legal_sets(&self) -> &LegalSetCache {
        &self.legal_sets
    }
}

/// Extract every unique pattern from an indexed sample
///
/// # Errors
///
/// Returns an error if:
/// - The pattern shape is empty, has a zero extent, or its arity differs from the sample's
/// - The pattern is larger than the sample on some axis
/// - Symmetries are requested for more than two spatial axes
pub fn extract_patterns(
    indexed_sample: ArrayViewD<'_, usize>,
    config: &CatalogConfig,
) -> Result<Vec<Pattern>> {
    config.validate()?;
    let pattern_shape = &config.pattern_shape;
    let sample_shape = indexed_sample.shape();

    if pattern_shape.len() != sample_shape.len() {
        return Err(invalid_parameter(
            "pattern_shape",
            &format!("{pattern_shape:?}"),
            &format!("sample has {} spatial axes", sample_shape.len()),
        ));
    }

    let mut origin_extent = Vec::with_capacity(sample_shape.len());
    for (axis, (&pattern_extent, &sample_extent)) in
        pattern_shape.iter().zip(sample_shape).enumerate()
    {
        if pattern_extent > sample_extent {
            return Err(CatalogError::PatternShapeTooLarge {
                axis,
                pattern_extent,
                sample_extent,
            });
        }
        origin_extent.push(sample_extent - pattern_extent + 1);
    }

    let symmetry = symmetry_for(sample_shape.len(), config.include_symmetries)?;

    // Content -> index; hashing replaces a linear scan over earlier patterns
    let mut seen: HashMap<ArrayD<usize>, usize> = HashMap::new();
    let mut patterns = Vec::new();

    for origin in ndarray::indices(IxDyn(&origin_extent)) {
        let origin = origin.slice();
        let window = indexed_sample.slice_each_axis(|description| {
            let axis = description.axis.index();
            let start = origin.get(axis).copied().unwrap_or(0);
            let extent = pattern_shape.get(axis).copied().unwrap_or(0);
            Slice::from(start..start + extent)
        });

        for variant in symmetry.variants(window) {
            if let Some(&existing) = seen.get(&variant) {
                trace!("Window at {origin:?} repeats pattern {existing}");
                continue;
            }
            let index = patterns.len();
            seen.insert(variant.clone(), index);
            patterns.push(Pattern::new(index, variant));
        }
    }

    info!("Extracted {} unique patterns", patterns.len());
    Ok(patterns)
}

/// Registry of the patterns extracted from one sample
///
/// Owns its patterns and resolves indices back to them. Independent catalogs
/// can coexist; nothing is shared between them.
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
    pattern_shape: Vec<usize>,
}

impl PatternCatalog {
    /// Extract and register the patterns of an indexed sample
    ///
    /// # Errors
    ///
    /// Propagates any error from [`extract_patterns`]
    pub fn from_indexed_sample(
        indexed_sample: ArrayViewD<'_, usize>,
        config: &CatalogConfig,
    ) -> Result<Self> {
        let patterns = extract_patterns(indexed_sample, config)?;
        Ok(Self {
            patterns,
            pattern_shape: config.pattern_shape.clone(),
        })
    }

    /// Register hand-built patterns
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list is empty
    /// - Pattern indices are not exactly `0..len` in order
    /// - Patterns differ in shape
    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self> {
        let pattern_shape = patterns
            .first()
            .map(|p| p.shape().to_vec())
            .ok_or_else(|| invalid_parameter("patterns", &0, &"at least one pattern is required"))?;

        for (position, pattern) in patterns.iter().enumerate() {
            if pattern.index() != position {
                return Err(invalid_parameter(
                    "patterns",
                    &pattern.index(),
                    &format!("expected index {position}"),
                ));
            }
            if pattern.shape() != pattern_shape.as_slice() {
                return Err(invalid_parameter(
                    "patterns",
                    &format!("{:?}", pattern.shape()),
                    &format!("expected shape {pattern_shape:?}"),
                ));
            }
        }

        Ok(Self {
            patterns,
            pattern_shape,
        })
    }

    /// Resolve a pattern index
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PatternNotFound`] if the index was never assigned
    #[allow(clippy::wrong_self_convention)]
    pub fn from_index(&self, index: usize) -> Result<&Pattern> {
        self.patterns
            .get(index)
            .ok_or(CatalogError::PatternNotFound {
                index,
                catalog_size: self.patterns.len(),
            })
    }

    /// Resolve a pattern index for cache population
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PatternNotFound`] if the index was never assigned
    pub fn pattern_mut(&mut self, index: usize) -> Result<&mut Pattern> {
        let catalog_size = self.patterns.len();
        self.patterns
            .get_mut(index)
            .ok_or(CatalogError::PatternNotFound {
                index,
                catalog_size,
            })
    }

    /// Attach a precomputed legal set to one pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is unknown, the offset has the wrong
    /// arity, or the offset already has a legal set
    pub fn set_legal_patterns(
        &mut self,
        pattern: usize,
        offset: Offset,
        legal_patterns: PatternSet,
    ) -> Result<()> {
        self.pattern_mut(pattern)?
            .set_legal_patterns(offset, legal_patterns)
    }

    /// All patterns in index order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Iterate patterns in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Test if the catalog holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Shape shared by every pattern
    pub fn pattern_shape(&self) -> &[usize] {
        &self.pattern_shape
    }

    /// Number of spatial axes of every pattern
    pub fn arity(&self) -> usize {
        self.pattern_shape.len()
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Symbol table and pattern catalog built from one raw sample
#[derive(Clone, Debug)]
pub struct SampleCatalog<T> {
    symbols: SymbolTable<T>,
    catalog: PatternCatalog,
}

impl<T> SampleCatalog<T>
where
    T: Copy + Eq + Hash,
{
    /// Index a raw sample and extract its patterns
    ///
    /// # Errors
    ///
    /// Returns an error if the sample cannot be indexed or patterns cannot be
    /// extracted with the given configuration
    pub fn from_sample(sample: ArrayViewD<'_, T>, config: &CatalogConfig) -> Result<Self> {
        let indexed = SymbolTable::index_sample(sample)?;
        let catalog = PatternCatalog::from_indexed_sample(indexed.indices.view(), config)?;
        Ok(Self {
            symbols: indexed.symbols,
            catalog,
        })
    }

    /// Raw channel values of a pattern, channel axis last
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern index is unknown
    pub fn decode_pattern(&self, index: usize) -> Result<ArrayD<T>> {
        let pattern = self.catalog.from_index(index)?;
        self.symbols.decode(pattern.data())
    }

    /// Symbol table of the sample
    pub const fn symbols(&self) -> &SymbolTable<T> {
        &self.symbols
    }

    /// Pattern catalog of the sample
    pub const fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Mutable pattern catalog for legal-set population
    pub const fn catalog_mut(&mut self) -> &mut PatternCatalog {
        &mut self.catalog
    }

    /// Consume the session and return its components
    pub fn into_parts(self) -> (SymbolTable<T>, PatternCatalog) {
        (self.symbols, self.catalog)
    }
}
