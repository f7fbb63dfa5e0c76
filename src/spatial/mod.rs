//! Spatial primitives over pattern windows
//!
//! This module contains spatial-related functionality including:
//! - Offset vectors and neighborhood enumeration
//! - Reflection and rotation of windows

/// Relative displacement vectors between windows
pub mod offset;
/// Symmetry groups applied during extraction
pub mod symmetry;

pub use offset::Offset;
