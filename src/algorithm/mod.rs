/// Bitset of pattern indices used for legal-neighbor sets
pub mod bitset;
/// Write-once per-offset legal-set storage
pub mod cache;
/// Exact and cached adjacency legality between patterns
pub mod compatibility;
/// Bulk population and verification of legal-set caches
pub mod precompute;
