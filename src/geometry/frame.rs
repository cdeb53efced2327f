use crate::error::{FrameError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::Shape;

/// A pose in 3D space: an origin plus an orthonormal local basis.
///
/// The basis is derived from a heading (forward) vector and an up vector:
/// `right = normalize(heading × up)`, and up is re-orthogonalized to
/// `right × heading` so the basis is exactly orthonormal even when the
/// caller's up is only approximately perpendicular to the heading.
///
/// Shape-local coordinates map into world space as
/// `origin + x * right + y * up`; the third local coordinate (depth) runs
/// along the heading.
#[derive(Debug, Clone)]
pub struct PlaneFrame {
    origin: Point3,
    heading: Vector3,
    up: Vector3,
    right: Vector3,
}

/// The 3D rings produced by projecting one shape through one frame.
#[derive(Debug, Clone)]
pub struct Rings {
    /// Projected outer contour.
    pub outer: Vec<Point3>,
    /// Projected hole contours, in hole order.
    pub holes: Vec<Vec<Point3>>,
}

impl PlaneFrame {
    /// Creates a frame from an origin, a heading and an up vector.
    ///
    /// # Errors
    ///
    /// Returns an error if either vector is zero-length or the two are
    /// parallel; a degenerate basis fails here rather than producing
    /// silently singular projections later.
    pub fn new(origin: Point3, heading: Vector3, up: Vector3) -> Result<Self> {
        let heading_len = heading.norm();
        if heading_len < TOLERANCE {
            return Err(FrameError::ZeroVector("heading").into());
        }
        let up_len = up.norm();
        if up_len < TOLERANCE {
            return Err(FrameError::ZeroVector("up").into());
        }
        let heading = heading / heading_len;

        let right = heading.cross(&(up / up_len));
        let right_len = right.norm();
        if right_len < TOLERANCE {
            return Err(FrameError::ParallelVectors.into());
        }
        let right = right / right_len;
        let up = right.cross(&heading);

        Ok(Self {
            origin,
            heading,
            up,
            right,
        })
    }

    /// Returns the origin point of the frame.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit heading (forward) vector.
    #[must_use]
    pub fn heading(&self) -> &Vector3 {
        &self.heading
    }

    /// Returns the unit up vector.
    #[must_use]
    pub fn up(&self) -> &Vector3 {
        &self.up
    }

    /// Returns the unit right vector.
    #[must_use]
    pub fn right(&self) -> &Vector3 {
        &self.right
    }

    /// Returns a copy of this frame translated by a world-space offset.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            origin: self.origin + offset,
            heading: self.heading,
            up: self.up,
            right: self.right,
        }
    }

    /// Maps a shape-local 2D point into world space.
    #[must_use]
    pub fn project(&self, point: &Point2) -> Point3 {
        self.origin + self.right * point.x + self.up * point.y
    }

    /// Maps a world point into local `(x, y, depth)` coordinates.
    ///
    /// For points on the frame's plane this is the exact inverse of
    /// [`project`](Self::project); for points off the plane, `x` and `y`
    /// address the in-plane projection and `depth` the distance along the
    /// heading.
    #[must_use]
    pub fn unproject(&self, point: &Point3) -> Point3 {
        let d = point - self.origin;
        Point3::new(d.dot(&self.right), d.dot(&self.up), d.dot(&self.heading))
    }

    /// Maps local `(x, y, depth)` coordinates back into world space.
    #[must_use]
    pub fn reproject(&self, local: &Point3) -> Point3 {
        self.origin + self.right * local.x + self.up * local.y + self.heading * local.z
    }

    /// Projects one contour into world space.
    #[must_use]
    pub fn project_contour(&self, contour: &[Point2]) -> Vec<Point3> {
        contour.iter().map(|p| self.project(p)).collect()
    }

    /// Projects a whole shape, outer contour and holes alike.
    #[must_use]
    pub fn project_shape(&self, shape: &Shape) -> Rings {
        Rings {
            outer: self.project_contour(shape.outer()),
            holes: shape
                .holes()
                .iter()
                .map(|h| self.project_contour(h))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn frame_along_z() -> PlaneFrame {
        PlaneFrame::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
        .unwrap()
    }

    // ── Degenerate input ───────────────────────────────────────

    #[test]
    fn zero_heading_is_rejected() {
        let result = PlaneFrame::new(
            Point3::origin(),
            Vector3::zeros(),
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn parallel_heading_and_up_are_rejected() {
        let result = PlaneFrame::new(
            Point3::origin(),
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(0.0, 0.0, -1.0),
        );
        assert!(result.is_err());
    }

    // ── Basis ──────────────────────────────────────────────────

    #[test]
    fn basis_is_orthonormal() {
        // A deliberately skewed up vector still yields an orthonormal basis.
        let frame = PlaneFrame::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(0.3, 1.0, 0.4),
        )
        .unwrap();

        assert!((frame.heading().norm() - 1.0).abs() < TOLERANCE);
        assert!((frame.up().norm() - 1.0).abs() < TOLERANCE);
        assert!((frame.right().norm() - 1.0).abs() < TOLERANCE);
        assert!(frame.heading().dot(frame.up()).abs() < TOLERANCE);
        assert!(frame.heading().dot(frame.right()).abs() < TOLERANCE);
        assert!(frame.up().dot(frame.right()).abs() < TOLERANCE);
    }

    #[test]
    fn right_follows_heading_cross_up() {
        let frame = frame_along_z();
        // heading × up = z × y = -x.
        assert!((frame.right().x + 1.0).abs() < TOLERANCE);
        assert!(frame.right().y.abs() < TOLERANCE);
        assert!(frame.right().z.abs() < TOLERANCE);
    }

    // ── Round trips ────────────────────────────────────────────

    #[test]
    fn project_unproject_round_trip_in_plane() {
        let frame = PlaneFrame::new(
            Point3::new(5.0, -2.0, 1.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
        .unwrap();

        let local = Point2::new(3.5, -1.25);
        let world = frame.project(&local);
        let back = frame.unproject(&world);
        assert_relative_eq!(back.x, local.x, epsilon = TOLERANCE);
        assert_relative_eq!(back.y, local.y, epsilon = TOLERANCE);
        assert!(back.z.abs() < TOLERANCE);
    }

    #[test]
    fn unproject_reports_depth_along_heading() {
        let frame = frame_along_z();
        let local = frame.unproject(&Point3::new(0.0, 0.0, 7.5));
        assert!((local.z - 7.5).abs() < TOLERANCE);
    }

    #[test]
    fn reproject_inverts_unproject() {
        let frame = PlaneFrame::new(
            Point3::new(-1.0, 4.0, 2.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
        )
        .unwrap();

        let world = Point3::new(2.0, -3.0, 0.5);
        let round = frame.reproject(&frame.unproject(&world));
        assert!((round - world).norm() < TOLERANCE);
    }

    // ── Shape projection ───────────────────────────────────────

    #[test]
    fn project_shape_carries_holes() {
        let ring = Shape::annulus(5.0, 3.0, 8).unwrap();
        let rings = frame_along_z().project_shape(&ring);
        assert_eq!(rings.outer.len(), 8);
        assert_eq!(rings.holes.len(), 1);
        assert_eq!(rings.holes[0].len(), 8);
    }
}
