//! Analysis modules for sample indexing and pattern extraction

/// Pattern extraction, deduplication and the pattern registry
pub mod patterns;
/// Mapping between raw symbols and dense indices
pub mod symbols;
