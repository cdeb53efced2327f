//! The boolean shape adapter.
//!
//! Thin operation structs over the external polygon boolean algebra. The
//! adapter owns the path conversion and the winding normalization of every
//! result; the clipping math itself belongs to the external library, and
//! input polygons are handed over as-is (self-intersections included).

mod offset;
mod paths;

pub use offset::{JoinStyle, Offset};

use geo::BooleanOps;

use crate::error::Result;
use crate::geometry::Shape;

/// Unites two shapes.
pub struct Union<'a> {
    a: &'a Shape,
    b: &'a Shape,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(a: &'a Shape, b: &'a Shape) -> Self {
        Self { a, b }
    }

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns an error if the external algorithm produces no output.
    pub fn execute(&self) -> Result<Shape> {
        let result = paths::to_polygon(self.a).union(&paths::to_polygon(self.b));
        paths::from_result(&result, "union")
    }
}

/// Subtracts the second shape from the first.
pub struct Difference<'a> {
    a: &'a Shape,
    b: &'a Shape,
}

impl<'a> Difference<'a> {
    /// Creates a new `Difference` operation.
    #[must_use]
    pub fn new(a: &'a Shape, b: &'a Shape) -> Self {
        Self { a, b }
    }

    /// Executes the difference.
    ///
    /// # Errors
    ///
    /// Returns an error if the subtraction eliminates the shape entirely.
    pub fn execute(&self) -> Result<Shape> {
        let result = paths::to_polygon(self.a).difference(&paths::to_polygon(self.b));
        paths::from_result(&result, "difference")
    }
}

/// Intersects two shapes.
pub struct Intersection<'a> {
    a: &'a Shape,
    b: &'a Shape,
}

impl<'a> Intersection<'a> {
    /// Creates a new `Intersection` operation.
    #[must_use]
    pub fn new(a: &'a Shape, b: &'a Shape) -> Self {
        Self { a, b }
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes do not overlap.
    pub fn execute(&self) -> Result<Shape> {
        let result = paths::to_polygon(self.a).intersection(&paths::to_polygon(self.b));
        paths::from_result(&result, "intersection")
    }
}

/// Keeps the regions covered by exactly one of the two shapes.
pub struct SymmetricDifference<'a> {
    a: &'a Shape,
    b: &'a Shape,
}

impl<'a> SymmetricDifference<'a> {
    /// Creates a new `SymmetricDifference` operation.
    #[must_use]
    pub fn new(a: &'a Shape, b: &'a Shape) -> Self {
        Self { a, b }
    }

    /// Executes the symmetric difference.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is empty (identical shapes).
    pub fn execute(&self) -> Result<Shape> {
        let result = paths::to_polygon(self.a).xor(&paths::to_polygon(self.b));
        paths::from_result(&result, "symmetric difference")
    }
}
