//! Error types for catalog construction, oracle caching and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all catalog operations
#[derive(Debug)]
pub enum CatalogError {
    /// Failed to load a sample image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Sample data doesn't meet extraction requirements
    InvalidSourceData {
        /// Description of what's wrong with the sample
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A grid cell refers to a symbol index outside the alphabet
    InvalidSymbolIndex {
        /// The offending symbol index
        index: usize,
        /// Number of symbols in the alphabet
        alphabet_size: usize,
    },

    /// The pattern window does not fit inside the sample on some axis
    PatternShapeTooLarge {
        /// Axis on which the window overflows
        axis: usize,
        /// Pattern extent along that axis
        pattern_extent: usize,
        /// Sample extent along that axis
        sample_extent: usize,
    },

    /// Symmetry expansion requested for an arity without a symmetry group
    UnsupportedSymmetry {
        /// Number of spatial axes of the sample
        dimensions: usize,
    },

    /// Pattern index was never assigned by this catalog
    PatternNotFound {
        /// The requested pattern index
        index: usize,
        /// Number of patterns in the catalog
        catalog_size: usize,
    },

    /// A legal set was already attached to this pattern for the offset
    LegalSetAlreadyDefined {
        /// Pattern owning the cache
        pattern: usize,
        /// Offset whose entry already exists
        offset: Vec<isize>,
    },

    /// Cached compatibility disagrees with the exact overlap test
    CacheInconsistency {
        /// Reference pattern
        pattern: usize,
        /// Candidate pattern
        candidate: usize,
        /// Offset of the cached entry
        offset: Vec<isize>,
        /// Answer given by the cache
        cached: bool,
    },

    /// Array reshaping failed
    Shape {
        /// Underlying ndarray error
        source: ndarray::ShapeError,
    },

    /// Logger initialisation failed
    Logger {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSymbolIndex {
                index,
                alphabet_size,
            } => {
                write!(
                    f,
                    "Symbol index {index} is out of bounds (alphabet size: {alphabet_size})"
                )
            }
            Self::PatternShapeTooLarge {
                axis,
                pattern_extent,
                sample_extent,
            } => {
                write!(
                    f,
                    "Pattern extent {pattern_extent} exceeds sample extent {sample_extent} on axis {axis}"
                )
            }
            Self::UnsupportedSymmetry { dimensions } => {
                write!(
                    f,
                    "Symmetry expansion is not supported for {dimensions} spatial axes"
                )
            }
            Self::PatternNotFound {
                index,
                catalog_size,
            } => {
                write!(
                    f,
                    "Pattern index {index} not found (catalog size: {catalog_size})"
                )
            }
            Self::LegalSetAlreadyDefined { pattern, offset } => {
                write!(
                    f,
                    "Pattern {pattern} already has a legal set for offset {offset:?}"
                )
            }
            Self::CacheInconsistency {
                pattern,
                candidate,
                offset,
                cached,
            } => {
                write!(
                    f,
                    "Cached compatibility of pattern {pattern} with {candidate} at offset {offset:?} is {cached}, exact overlap says {}",
                    !cached
                )
            }
            Self::Shape { source } => write!(f, "Array shape error: {source}"),
            Self::Logger { source } => write!(f, "Logger initialisation failed: {source}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Shape { source } => Some(source),
            Self::Logger { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for catalog results
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<image::ImageError> for CatalogError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<ndarray::ShapeError> for CatalogError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Shape { source: err }
    }
}

impl From<flexi_logger::FlexiLoggerError> for CatalogError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logger { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CatalogError {
    CatalogError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source_data(reason: &impl ToString) -> CatalogError {
    CatalogError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
