//! Pattern catalog and adjacency oracle for overlapping-model wave function collapse
//!
//! The crate indexes a sample grid into symbols, extracts every fixed-size
//! window together with its reflections and rotations, keeps one pattern per
//! distinct content, and decides whether two patterns may sit next to each
//! other at a given offset. The collapse solver itself lives elsewhere and
//! consumes this oracle.

#![deny(unsafe_code)]

/// Compatibility oracle, legal-set caching and bulk precomputation
pub mod algorithm;
/// Symbol indexing and pattern extraction from samples
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Offsets and symmetry transforms over pattern windows
pub mod spatial;

pub use algorithm::bitset::PatternSet;
pub use analysis::patterns::{Pattern, PatternCatalog, SampleCatalog, extract_patterns};
pub use analysis::symbols::{IndexedSample, Symbol, SymbolTable};
pub use io::configuration::CatalogConfig;
pub use io::error::{CatalogError, Result};
pub use spatial::offset::Offset;
