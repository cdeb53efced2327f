use geo::MultiPolygon;
use geo_buf::{buffer_polygon, buffer_polygon_rounded};

use crate::error::Result;
use crate::geometry::Shape;

use super::paths;

/// Corner treatment for offset joins, forwarded to the external
/// buffering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStyle {
    /// Circular arcs at convex corners.
    Round,
    /// Squared-off corners.
    Square,
    /// Extended sharp corners.
    #[default]
    Miter,
}

/// Offsets a shape by a signed distance: positive expands, negative
/// contracts. Holes move opposite to the outer contour, so expanding a
/// ring thickens its wall on both sides.
pub struct Offset<'a> {
    shape: &'a Shape,
    distance: f64,
    join: JoinStyle,
}

impl<'a> Offset<'a> {
    /// Creates a new `Offset` operation.
    #[must_use]
    pub fn new(shape: &'a Shape, distance: f64, join: JoinStyle) -> Self {
        Self {
            shape,
            distance,
            join,
        }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset eliminates the shape entirely
    /// (contracting past its medial axis).
    pub fn execute(&self) -> Result<Shape> {
        let polygon = paths::to_polygon(self.shape);
        // The external library exposes two corner families; round joins map
        // to the rounded one, square and mitered joins to the sharp one.
        let result: MultiPolygon<f64> = match self.join {
            JoinStyle::Round => buffer_polygon_rounded(&polygon, self.distance),
            JoinStyle::Square | JoinStyle::Miter => buffer_polygon(&polygon, self.distance),
        };
        paths::from_result(&result, "offset")
    }
}
