use crate::error::{Result, SweepError};
use crate::geometry::{PlaneFrame, Shape};
use crate::mesh::Mesh;

use super::{Sweep, SweepOptions, SweepSection};

/// A pure per-section shape transform applied along a loft.
///
/// Implementations receive the loft's base shape and the section's
/// normalized position `t` (0 at the first frame, 1 at the last) and
/// return the section's cross-section. The output must keep a consistent
/// hole structure across the whole loft; a modifier that does not is
/// reported by the sweep engine's mismatch errors.
pub trait ShapeModifier {
    /// Produces the section shape at normalized position `t`.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failures (for example
    /// interpolation between structurally different shapes).
    fn modify(&self, shape: &Shape, t: f64) -> Result<Shape>;
}

impl<F> ShapeModifier for F
where
    F: Fn(&Shape, f64) -> Result<Shape>,
{
    fn modify(&self, shape: &Shape, t: f64) -> Result<Shape> {
        self(shape, t)
    }
}

/// Interpolates hole-for-hole between two structurally matching shapes,
/// ignoring the loft's base shape.
///
/// Holes are matched by their position in the hole list; supplying both
/// end shapes with holes in a consistent order is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct ShapeInterpolator {
    start: Shape,
    end: Shape,
}

impl ShapeInterpolator {
    /// Creates an interpolator between two end shapes.
    #[must_use]
    pub fn new(start: Shape, end: Shape) -> Self {
        Self { start, end }
    }
}

impl ShapeModifier for ShapeInterpolator {
    fn modify(&self, _shape: &Shape, t: f64) -> Result<Shape> {
        self.start.interpolate(&self.end, t)
    }
}

/// Sweeps a base shape along a frame sequence, transforming the section
/// per sample.
pub struct Loft<'a, M> {
    shape: &'a Shape,
    frames: &'a [PlaneFrame],
    modifier: M,
    options: SweepOptions,
}

impl<'a, M: ShapeModifier> Loft<'a, M> {
    /// Creates a new `Loft` operation.
    #[must_use]
    pub fn new(
        shape: &'a Shape,
        frames: &'a [PlaneFrame],
        modifier: M,
        options: SweepOptions,
    ) -> Self {
        Self {
            shape,
            frames,
            modifier,
            options,
        }
    }

    /// Executes the loft.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 frames were supplied, if the
    /// modifier fails, or if its output breaks the sweep engine's
    /// structural requirements.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Mesh> {
        if self.frames.len() < 2 {
            return Err(SweepError::InsufficientSamples(self.frames.len()).into());
        }
        let last = (self.frames.len() - 1) as f64;
        let mut sections = Vec::with_capacity(self.frames.len());
        for (i, frame) in self.frames.iter().enumerate() {
            let t = i as f64 / last;
            let section_shape = self.modifier.modify(self.shape, t)?;
            sections.push(SweepSection::new(section_shape, frame.clone()));
        }
        Sweep::new(sections, self.options).execute()
    }
}
