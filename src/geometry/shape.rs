use std::f64::consts::TAU;

use crate::error::{Result, ShapeError};
use crate::math::polygon_2d::{is_ccw, lerp_contour, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A closed 2D cross-section: one outer contour plus zero or more holes.
///
/// By convention the outer contour winds counter-clockwise and every hole
/// winds clockwise. Primitive constructors and the boolean adapter always
/// produce that orientation; hand-built contours are trusted as given.
///
/// Shapes are immutable. Every transform returns a new shape and runs the
/// outer contour and every hole through the same mapping path, so the two
/// can never be transformed asymmetrically.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    outer: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
}

impl Shape {
    /// Creates a shape from an outer contour and a list of hole contours.
    ///
    /// Hole containment within the outer contour is assumed, not verified.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DegenerateContour`] if the outer contour or
    /// any hole has fewer than 3 points.
    pub fn new(outer: Vec<Point2>, holes: Vec<Vec<Point2>>) -> Result<Self> {
        if outer.len() < 3 {
            return Err(ShapeError::DegenerateContour(outer.len()).into());
        }
        for hole in &holes {
            if hole.len() < 3 {
                return Err(ShapeError::DegenerateContour(hole.len()).into());
            }
        }
        Ok(Self { outer, holes })
    }

    /// Creates a counter-clockwise circle centered at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or fewer than
    /// 3 segments are requested.
    pub fn circle(radius: f64, segments: usize) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(ShapeError::NonPositiveParameter {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        if segments < 3 {
            return Err(ShapeError::DegenerateContour(segments).into());
        }
        Ok(Self {
            outer: circle_points(radius, segments, false),
            holes: Vec::new(),
        })
    }

    /// Creates a counter-clockwise axis-aligned rectangle centered at the
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-positive.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        if width < TOLERANCE {
            return Err(ShapeError::NonPositiveParameter {
                parameter: "width",
                value: width,
            }
            .into());
        }
        if height < TOLERANCE {
            return Err(ShapeError::NonPositiveParameter {
                parameter: "height",
                value: height,
            }
            .into());
        }
        let (hw, hh) = (width / 2.0, height / 2.0);
        Ok(Self {
            outer: vec![
                Point2::new(-hw, -hh),
                Point2::new(hw, -hh),
                Point2::new(hw, hh),
                Point2::new(-hw, hh),
            ],
            holes: Vec::new(),
        })
    }

    /// Creates a ring: a circle with a concentric circular hole.
    ///
    /// The outer contour winds counter-clockwise, the hole clockwise, both
    /// starting at angle zero so interpolation against a rotated copy stays
    /// well-defined.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive, the inner radius
    /// does not fit inside the outer, or fewer than 3 segments are
    /// requested.
    pub fn annulus(outer_radius: f64, inner_radius: f64, segments: usize) -> Result<Self> {
        if inner_radius < TOLERANCE {
            return Err(ShapeError::NonPositiveParameter {
                parameter: "inner radius",
                value: inner_radius,
            }
            .into());
        }
        if inner_radius + TOLERANCE >= outer_radius {
            return Err(ShapeError::Degenerate(format!(
                "annulus inner radius {inner_radius} must be smaller than outer radius {outer_radius}"
            ))
            .into());
        }
        if segments < 3 {
            return Err(ShapeError::DegenerateContour(segments).into());
        }
        Ok(Self {
            outer: circle_points(outer_radius, segments, false),
            holes: vec![circle_points(inner_radius, segments, true)],
        })
    }

    /// Returns the outer contour.
    #[must_use]
    pub fn outer(&self) -> &[Point2] {
        &self.outer
    }

    /// Returns the hole contours.
    #[must_use]
    pub fn holes(&self) -> &[Vec<Point2>] {
        &self.holes
    }

    /// Returns the number of holes.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Iterates over all contours: the outer contour first, then each hole
    /// in order.
    pub fn contours(&self) -> impl Iterator<Item = &[Point2]> {
        std::iter::once(self.outer.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Returns the signed area of the outer contour.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.outer)
    }

    /// Returns whether the outer contour winds counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        is_ccw(&self.outer)
    }

    /// Translates every contour by the given offset.
    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        self.map_points(|p| p + offset)
    }

    /// Scales every contour about the origin.
    #[must_use]
    pub fn scale(&self, x: f64, y: f64) -> Self {
        self.map_points(|p| Point2::new(p.x * x, p.y * y))
    }

    /// Rotates every contour counter-clockwise about the origin.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.map_points(|p| Point2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
    }

    /// Reverses the point order of the outer contour and of every hole,
    /// flipping their winding. Reversing twice restores the shape
    /// point-for-point.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            outer: self.outer.iter().rev().copied().collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().rev().copied().collect())
                .collect(),
        }
    }

    /// Interpolates pointwise towards another shape at parameter `t`
    /// (0 yields `self`, 1 yields `other`).
    ///
    /// Holes are matched by their position in the hole list, not by any
    /// geometric similarity; supplying holes in a consistent order is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the two shapes have different hole counts or
    /// any pair of matched contours has different point counts.
    pub fn interpolate(&self, other: &Self, t: f64) -> Result<Self> {
        if self.holes.len() != other.holes.len() {
            return Err(ShapeError::HoleCountMismatch {
                left: self.holes.len(),
                right: other.holes.len(),
            }
            .into());
        }
        for (a, b) in self.contours().zip(other.contours()) {
            if a.len() != b.len() {
                return Err(ShapeError::PointCountMismatch {
                    left: a.len(),
                    right: b.len(),
                }
                .into());
            }
        }
        Ok(Self {
            outer: lerp_contour(&self.outer, &other.outer, t),
            holes: self
                .holes
                .iter()
                .zip(&other.holes)
                .map(|(a, b)| lerp_contour(a, b, t))
                .collect(),
        })
    }

    /// Applies one point mapping to the outer contour and to every hole.
    fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(Point2) -> Point2,
    {
        Self {
            outer: self.outer.iter().map(|p| f(*p)).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().map(|p| f(*p)).collect())
                .collect(),
        }
    }
}

/// Discretizes a circle of the given radius, starting at angle zero.
#[allow(clippy::cast_precision_loss)]
fn circle_points(radius: f64, segments: usize, clockwise: bool) -> Vec<Point2> {
    (0..segments)
        .map(|i| {
            let mut angle = TAU * i as f64 / segments as f64;
            if clockwise {
                angle = -angle;
            }
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
