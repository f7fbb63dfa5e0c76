//! Catalog constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Default pattern extent along every spatial axis
pub const DEFAULT_PATTERN_EXTENT: usize = 2;

/// Default Chebyshev radius of the offset neighborhood used for precomputation
pub const DEFAULT_NEIGHBORHOOD_RADIUS: usize = 1;

// Keeps offset enumeration from exploding on large windows
/// Maximum allowed neighborhood radius
pub const MAX_NEIGHBORHOOD_RADIUS: usize = 8;

/// Fixed seed for reproducible cache verification
pub const DEFAULT_SEED: u64 = 42;

/// Number of sampled checks run by cache verification when enabled without a count
pub const DEFAULT_VERIFY_SAMPLES: usize = 1000;

// Pattern sheet layout
/// Number of pattern tiles per sheet row
pub const PATTERN_SHEET_COLUMNS: usize = 4;
/// Pixels per pattern cell in the exported sheet
pub const DEFAULT_PATTERN_SCALE: u32 = 8;
/// Transparent gap between sheet tiles, in cells
pub const PATTERN_SHEET_GUTTER: u32 = 1;

/// Width of the precomputation progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Suffix added to pattern sheet filenames
pub const SHEET_SUFFIX: &str = "_patterns";

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Window extent along each spatial axis
    pub pattern_shape: Vec<usize>,
    /// Expand each window with its reflections and rotations
    pub include_symmetries: bool,
}

impl CatalogConfig {
    /// Square 2D windows of the given extent with symmetry expansion
    pub fn planar(extent: usize) -> Self {
        Self {
            pattern_shape: vec![extent, extent],
            include_symmetries: true,
        }
    }

    /// Windows of an arbitrary shape with symmetry expansion
    pub fn with_shape(pattern_shape: &[usize]) -> Self {
        Self {
            pattern_shape: pattern_shape.to_vec(),
            include_symmetries: true,
        }
    }

    /// Disable reflections and rotations
    #[must_use]
    pub fn without_symmetries(mut self) -> Self {
        self.include_symmetries = false;
        self
    }

    /// Number of spatial axes the pattern spans
    pub fn arity(&self) -> usize {
        self.pattern_shape.len()
    }

    /// Check that the pattern shape is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is empty or has a zero extent
    pub fn validate(&self) -> Result<()> {
        if self.pattern_shape.is_empty() {
            return Err(invalid_parameter(
                "pattern_shape",
                &"[]",
                &"at least one spatial axis is required",
            ));
        }
        if self.pattern_shape.contains(&0) {
            return Err(invalid_parameter(
                "pattern_shape",
                &format!("{:?}", self.pattern_shape),
                &"every extent must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::planar(DEFAULT_PATTERN_EXTENT)
    }
}
