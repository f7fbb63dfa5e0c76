//! Reflection and rotation variants of extracted windows
//!
//! Symmetry expansion increases pattern variety from limited samples. Only the
//! planar case has a symmetry group; one spatial axis uses the identity, and
//! higher arities are rejected rather than silently skipped.

use ndarray::{ArrayD, ArrayViewD, Axis};

use crate::io::error::{CatalogError, Result};

/// A set of transforms applied to every extracted window
pub trait SymmetryGroup {
    /// Produce the window followed by its transformed variants
    ///
    /// The first element is always the untransformed window. Every returned
    /// array has the window's shape.
    fn variants(&self, window: ArrayViewD<'_, usize>) -> Vec<ArrayD<usize>>;
}

/// The trivial group: only the window itself
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityGroup;

impl SymmetryGroup for IdentityGroup {
    fn variants(&self, window: ArrayViewD<'_, usize>) -> Vec<ArrayD<usize>> {
        vec![window.to_owned()]
    }
}

/// Reflections and rotations of 2D windows
///
/// Variant order: identity, horizontal flip, vertical flip, rot90, rot180.
/// rot90 is omitted for non-square windows since it would change the shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGroup;

impl SymmetryGroup for PlanarGroup {
    fn variants(&self, window: ArrayViewD<'_, usize>) -> Vec<ArrayD<usize>> {
        if window.ndim() != 2 {
            return vec![window.to_owned()];
        }

        let mut variants = vec![
            window.to_owned(),
            flip_horizontal(window.view()),
            flip_vertical(window.view()),
        ];
        if window.len_of(Axis(0)) == window.len_of(Axis(1)) {
            variants.push(rotate_90(window.view()));
        }
        variants.push(rotate_180(window));
        variants
    }
}

/// Select the symmetry group for a sample with `dimensions` spatial axes
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedSymmetry`] if symmetries are requested
/// for more than two spatial axes
pub fn symmetry_for(dimensions: usize, include_symmetries: bool) -> Result<Box<dyn SymmetryGroup>> {
    match (include_symmetries, dimensions) {
        (false, _) | (true, 0 | 1) => Ok(Box::new(IdentityGroup)),
        (true, 2) => Ok(Box::new(PlanarGroup)),
        (true, _) => Err(CatalogError::UnsupportedSymmetry { dimensions }),
    }
}

/// Mirror a 2D window left to right (reverses axis 1)
pub fn flip_horizontal(window: ArrayViewD<'_, usize>) -> ArrayD<usize> {
    let mut flipped = window.to_owned();
    flipped.invert_axis(Axis(1));
    standard(flipped)
}

/// Mirror a 2D window top to bottom (reverses axis 0)
pub fn flip_vertical(window: ArrayViewD<'_, usize>) -> ArrayD<usize> {
    let mut flipped = window.to_owned();
    flipped.invert_axis(Axis(0));
    standard(flipped)
}

/// Rotate a 2D window a quarter turn counter-clockwise
///
/// `result[i][j] = window[j][cols - 1 - i]`, so the result has the transposed
/// shape.
pub fn rotate_90(window: ArrayViewD<'_, usize>) -> ArrayD<usize> {
    // Transpose then reverse rows
    let mut rotated = window.reversed_axes().to_owned();
    rotated.invert_axis(Axis(0));
    standard(rotated)
}

/// Rotate a 2D window a half turn
pub fn rotate_180(window: ArrayViewD<'_, usize>) -> ArrayD<usize> {
    let mut rotated = window.to_owned();
    rotated.invert_axis(Axis(0));
    rotated.invert_axis(Axis(1));
    standard(rotated)
}

fn standard(array: ArrayD<usize>) -> ArrayD<usize> {
    array.as_standard_layout().into_owned()
}
