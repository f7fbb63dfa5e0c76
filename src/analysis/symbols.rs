//! Mapping between raw sample symbols and dense integer indices
//!
//! A sample's innermost axis holds the channels of one cell (an RGBA pixel,
//! for example); every axis before it is spatial. Each distinct channel tuple
//! becomes one symbol, numbered in first-seen row-major order so the mapping
//! and every pattern index built on it are reproducible.

use log::info;
use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn};
use num_traits::{Bounded, NumCast};
use std::collections::HashMap;
use std::hash::Hash;

use crate::io::error::{CatalogError, Result, invalid_parameter, invalid_source_data};

/// Channel values of one sample cell
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol<T>(pub Vec<T>);

impl<T> Symbol<T> {
    /// Channel values in order
    pub fn channels(&self) -> &[T] {
        &self.0
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Symbol<T> {
    fn from(channels: [T; N]) -> Self {
        Self(channels.to_vec())
    }
}

/// Bidirectional symbol <-> index mapping for one sample
#[derive(Clone, Debug)]
pub struct SymbolTable<T> {
    to_index: HashMap<Symbol<T>, usize>,
    to_symbol: Vec<Symbol<T>>,
    channels: usize,
}

/// A sample converted to symbol indices, together with its symbol table
#[derive(Clone, Debug)]
pub struct IndexedSample<T> {
    /// Symbol table built from the sample
    pub symbols: SymbolTable<T>,
    /// Spatially shaped grid of symbol indices
    pub indices: ArrayD<usize>,
}

impl<T> SymbolTable<T>
where
    T: Copy + Eq + Hash,
{
    /// Index every cell of a sample
    ///
    /// Builds a fresh table; nothing is shared with tables from earlier samples.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sample has fewer than two axes (spatial plus channel)
    /// - The channel axis is empty
    pub fn index_sample(sample: ArrayViewD<'_, T>) -> Result<IndexedSample<T>> {
        if sample.ndim() < 2 {
            return Err(invalid_source_data(&format!(
                "sample needs at least one spatial axis and a channel axis, got shape {:?}",
                sample.shape()
            )));
        }
        let channel_axis = Axis(sample.ndim() - 1);
        let channels = sample.len_of(channel_axis);
        if channels == 0 {
            return Err(invalid_source_data(&"sample has an empty channel axis"));
        }

        let spatial_shape = sample.shape().split_last().map_or(&[][..], |(_, s)| s);
        let mut table = Self {
            to_index: HashMap::new(),
            to_symbol: Vec::new(),
            channels,
        };

        // Lanes along the channel axis are visited in row-major spatial order
        let cells: Vec<usize> = sample
            .lanes(channel_axis)
            .into_iter()
            .map(|lane| table.intern(Symbol(lane.to_vec())))
            .collect();

        let indices = ArrayD::from_shape_vec(IxDyn(spatial_shape), cells)?;

        info!("Unique symbol count = {}", table.alphabet_size());

        Ok(IndexedSample {
            symbols: table,
            indices,
        })
    }

    fn intern(&mut self, symbol: Symbol<T>) -> usize {
        if let Some(&index) = self.to_index.get(&symbol) {
            return index;
        }
        let index = self.to_symbol.len();
        self.to_symbol.push(symbol.clone());
        self.to_index.insert(symbol, index);
        index
    }

    /// Index assigned to a symbol, if it occurs in the sample
    pub fn symbol_to_index(&self, symbol: &Symbol<T>) -> Option<usize> {
        self.to_index.get(symbol).copied()
    }

    /// Symbol behind an index, if the index is in the alphabet
    pub fn index_to_symbol(&self, index: usize) -> Option<&Symbol<T>> {
        self.to_symbol.get(index)
    }

    /// Number of distinct symbols in the sample
    pub fn alphabet_size(&self) -> usize {
        self.to_symbol.len()
    }

    /// Number of channels per symbol
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// All symbols in index order
    pub fn symbols(&self) -> &[Symbol<T>] {
        &self.to_symbol
    }

    /// Convert an index grid back to raw channel values
    ///
    /// `None` marks an unresolved cell and is rendered with `placeholder`.
    /// The output has the grid's shape with the channel axis appended.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A cell holds an index outside the alphabet
    /// - The placeholder has the wrong number of channels
    pub fn reconstruct(
        &self,
        grid: ArrayViewD<'_, Option<usize>>,
        placeholder: &Symbol<T>,
    ) -> Result<ArrayD<T>> {
        if placeholder.0.len() != self.channels {
            return Err(invalid_parameter(
                "placeholder",
                &placeholder.0.len(),
                &format!("expected {} channels", self.channels),
            ));
        }

        let mut values = Vec::with_capacity(grid.len() * self.channels);
        for cell in &grid {
            let symbol = match *cell {
                None => placeholder,
                Some(index) => self.lookup(index)?,
            };
            values.extend_from_slice(&symbol.0);
        }

        self.with_channel_axis(grid.shape(), values)
    }

    /// Convert a fully resolved index grid back to raw channel values
    ///
    /// # Errors
    ///
    /// Returns an error if a cell holds an index outside the alphabet
    pub fn decode(&self, grid: ArrayViewD<'_, usize>) -> Result<ArrayD<T>> {
        let mut values = Vec::with_capacity(grid.len() * self.channels);
        for &index in &grid {
            values.extend_from_slice(&self.lookup(index)?.0);
        }

        self.with_channel_axis(grid.shape(), values)
    }

    fn lookup(&self, index: usize) -> Result<&Symbol<T>> {
        self.to_symbol
            .get(index)
            .ok_or(CatalogError::InvalidSymbolIndex {
                index,
                alphabet_size: self.alphabet_size(),
            })
    }

    fn with_channel_axis(&self, spatial_shape: &[usize], values: Vec<T>) -> Result<ArrayD<T>> {
        let mut shape = spatial_shape.to_vec();
        shape.push(self.channels);
        Ok(ArrayD::from_shape_vec(IxDyn(&shape), values)?)
    }
}

impl<T> SymbolTable<T>
where
    T: Copy + Eq + Hash + Bounded + NumCast,
{
    /// Mid-range placeholder for unresolved cells (mid-gray for colour channels)
    pub fn neutral_symbol(&self) -> Symbol<T> {
        Symbol(vec![neutral_channel::<T>(); self.channels])
    }

    /// Convert an index grid back to raw values using the neutral placeholder
    ///
    /// # Errors
    ///
    /// Returns an error if a cell holds an index outside the alphabet
    pub fn reconstruct_with_neutral(
        &self,
        grid: ArrayViewD<'_, Option<usize>>,
    ) -> Result<ArrayD<T>> {
        self.reconstruct(grid, &self.neutral_symbol())
    }
}

/// Midpoint of a channel type's range, rounded
pub fn neutral_channel<T: Bounded + NumCast>() -> T {
    let low = T::min_value().to_f64().unwrap_or(0.0);
    let high = T::max_value().to_f64().unwrap_or(0.0);
    let mid = low.midpoint(high).round();
    <T as NumCast>::from(mid).unwrap_or_else(T::min_value)
}
