//! Relative displacement vectors between pattern windows
//!
//! An offset describes where a candidate window sits relative to a reference
//! window. Coordinates are in storage axis order, the same order used to index
//! pattern data.

use std::fmt;

/// Integer displacement with one component per spatial axis
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset(Vec<isize>);

impl Offset {
    /// Create an offset from its components
    pub const fn new(components: Vec<isize>) -> Self {
        Self(components)
    }

    /// The origin offset of the given arity
    pub fn zero(arity: usize) -> Self {
        Self(vec![0; arity])
    }

    /// The `2 * arity` axis-aligned unit offsets
    ///
    /// Ordered by axis, negative direction first.
    pub fn faces(arity: usize) -> Vec<Self> {
        let mut offsets = Vec::with_capacity(2 * arity);
        for axis in 0..arity {
            for step in [-1, 1] {
                let mut components = vec![0; arity];
                if let Some(component) = components.get_mut(axis) {
                    *component = step;
                }
                offsets.push(Self(components));
            }
        }
        offsets
    }

    /// Every offset whose components all lie in `-radius..=radius`
    ///
    /// Includes the origin. In 2D with radius 1 this is the 8 unit offsets
    /// plus origin. Enumerated in row-major order.
    pub fn neighborhood(arity: usize, radius: usize) -> Vec<Self> {
        let r = radius as isize;
        let mut offsets = vec![Self(Vec::with_capacity(arity))];
        for _ in 0..arity {
            offsets = offsets
                .into_iter()
                .flat_map(|prefix| {
                    (-r..=r).map(move |step| {
                        let mut components = prefix.0.clone();
                        components.push(step);
                        Self(components)
                    })
                })
                .collect();
        }
        offsets
    }

    /// Number of components
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Components in axis order
    pub fn components(&self) -> &[isize] {
        &self.0
    }

    /// The offset pointing the opposite way
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self(self.0.iter().map(|&c| -c).collect())
    }
}

impl From<Vec<isize>> for Offset {
    fn from(components: Vec<isize>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[isize; N]> for Offset {
    fn from(components: [isize; N]) -> Self {
        Self(components.to_vec())
    }
}

impl From<&[isize]> for Offset {
    fn from(components: &[isize]) -> Self {
        Self(components.to_vec())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
